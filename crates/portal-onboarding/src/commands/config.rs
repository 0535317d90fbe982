//! Configuration commands

use anyhow::Result;

use crate::cli::{ConfigCommands, ConfigShowArgs};

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show(args) => show(args),
    }
}

fn show(args: ConfigShowArgs) -> Result<()> {
    let config = super::load_config()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", serde_yaml_ng::to_string(&config)?);
    }
    Ok(())
}
