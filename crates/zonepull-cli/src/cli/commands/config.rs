//! `zonepull config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;

pub async fn execute(_ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(),
        ConfigCommands::Set { key, value } => set_config(&key, &value),
        ConfigCommands::Path => show_path(),
    }
}

fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Current Configuration:".bold());
    println!();

    let api_display = config
        .api_url
        .clone()
        .unwrap_or_else(|| "(not set)".dimmed().to_string());
    println!("  {} {}", "api_url:".bold(), api_display);

    let user_display = config
        .username
        .clone()
        .unwrap_or_else(|| "(not set)".dimmed().to_string());
    println!("  {} {}", "username:".bold(), user_display);

    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "api_url" => {
            config.api_url = Some(value.to_string());
            println!(
                "{} API URL set to {}.",
                "Success:".green().bold(),
                value.cyan()
            );
        }
        "username" => {
            config.username = Some(value.to_string());
            println!(
                "{} Username set to {}.",
                "Success:".green().bold(),
                value.cyan()
            );
        }
        _ => {
            anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 api_url   - Base URL of the account API\n  \
                 username  - Default account username",
                key
            );
        }
    }

    config.save()?;

    Ok(())
}

fn show_path() -> Result<()> {
    let path = Config::path()?;
    println!("{}", path.display());
    Ok(())
}
