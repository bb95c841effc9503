//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};

/// Export DNS zones from a legacy account API
///
/// Authenticates with a username and password, lists every domain of the
/// account, and writes each zone as zone-file text to stdout or a file.
#[derive(Parser, Debug)]
#[command(name = "zonepull")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the account API (or set ZONEPULL_API_URL)
    #[arg(long, env = "ZONEPULL_API_URL", global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export every zone of the account as zone-file text
    Export(ExportArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Export command
// ============================================================================

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Account username (or set ZONEPULL_USERNAME)
    #[arg(env = "ZONEPULL_USERNAME")]
    pub username: Option<String>,

    /// Write zones to this file instead of stdout
    pub outfile: Option<String>,

    /// Account password; prompted for interactively when not set
    #[arg(long, env = "ZONEPULL_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (api_url or username)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
