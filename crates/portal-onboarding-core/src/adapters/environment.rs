//! Fixed execution environment

use std::sync::Mutex;

use super::{ExecutionEnvironment, ShimEntryPoint};

/// Environment with a fixed user agent, host and marker
///
/// The installed shim is kept so callers can invoke it later.
pub struct StaticEnvironment {
    user_agent: String,
    host: String,
    marker: bool,
    shim: Mutex<Option<ShimEntryPoint>>,
}

impl StaticEnvironment {
    pub fn new(user_agent: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            host: host.into(),
            marker: false,
            shim: Mutex::new(None),
        }
    }

    /// Mark the extension as present
    pub fn with_extension(mut self) -> Self {
        self.marker = true;
        self
    }

    /// The shim installed in place of the extension, if any
    pub fn shim(&self) -> Option<ShimEntryPoint> {
        self.shim.lock().ok().and_then(|slot| slot.clone())
    }

    /// Invoke the installed shim; returns false when none is installed
    pub fn call_shim(&self) -> bool {
        match self.shim() {
            Some(entry_point) => {
                entry_point();
                true
            }
            None => false,
        }
    }
}

impl ExecutionEnvironment for StaticEnvironment {
    fn has_extension_marker(&self) -> bool {
        self.marker
    }

    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn host(&self) -> String {
        self.host.clone()
    }

    fn install_shim(&self, entry_point: ShimEntryPoint) {
        if let Ok(mut slot) = self.shim.lock() {
            *slot = Some(entry_point);
        }
    }
}
