//! `config show`: the effective settings and where the file would live.

use anyhow::Result;

use crate::config::{Config, Settings};

pub fn handle(settings: &Settings) -> Result<()> {
    match Config::default_path() {
        Some(path) if path.exists() => {
            println!("Config file: {}", path.display());
        }
        Some(path) => {
            println!("Config file: {} (not present)", path.display());
        }
        None => {
            println!("Config file: <no config directory on this system>");
        }
    }

    println!("API base:    {}", settings.api_base);
    println!("Timeout:     {}s", settings.timeout.as_secs());

    Ok(())
}
