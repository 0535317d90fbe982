//! User-agent parsing backed by woothee

use woothee::parser::Parser;

use super::{BrowserInfo, UserAgentParser};

/// Name woothee reports for agents it cannot identify
const UNKNOWN: &str = "UNKNOWN";

/// Stock parser delegating to the woothee user-agent database
#[derive(Debug, Default, Clone, Copy)]
pub struct WootheeParser;

impl UserAgentParser for WootheeParser {
    fn parse(&self, user_agent: &str) -> BrowserInfo {
        let name = Parser::new()
            .parse(user_agent)
            .map(|result| result.name)
            .filter(|name| !name.is_empty() && *name != UNKNOWN)
            .map(str::to_string);
        BrowserInfo { name }
    }
}
