//! Configuration CLI command handlers

use crate::cli::commands::{ConfigCommand, ConfigKey};
use crate::core::config::{Config, DEFAULT_ENDPOINT};
use crate::error::Result;

/// Handle configuration commands
pub fn handle_config(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Set { key, value } => handle_set(key, value),
        ConfigCommand::Get { key } => handle_get(key),
        ConfigCommand::Remove { key } => handle_remove(key),
        ConfigCommand::Path => {
            println!("{}", Config::config_path()?.display());
            Ok(())
        }
    }
}

/// Handle setting a configuration value
fn handle_set(key: ConfigKey, value: String) -> Result<()> {
    match key {
        ConfigKey::Endpoint => {
            let mut config = Config::load()?;
            config.set_endpoint(&value)?;
            config.save()?;

            println!("Endpoint set to: {}", config.endpoint);
        }
    }
    Ok(())
}

/// Handle getting a configuration value
fn handle_get(key: ConfigKey) -> Result<()> {
    match key {
        ConfigKey::Endpoint => {
            let config = Config::load()?;
            println!("Endpoint: {}", config.endpoint);
        }
    }
    Ok(())
}

/// Handle removing a configuration value
fn handle_remove(key: ConfigKey) -> Result<()> {
    match key {
        ConfigKey::Endpoint => {
            let mut config = Config::load()?;
            config.endpoint = DEFAULT_ENDPOINT.to_string();
            config.save()?;
            println!("Endpoint reset to default: {}", DEFAULT_ENDPOINT);
        }
    }
    Ok(())
}
