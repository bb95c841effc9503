//! Command implementations.

pub mod config;
pub mod export;

use anyhow::Result;
use url::Url;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// API base URL resolved from flag, env, or config
    pub api_url: Option<String>,

    /// Username from the config file, used when the positional is omitted
    pub config_username: Option<String>,
}

impl Context {
    /// Get the API base URL, returning an error if unset or not http(s).
    pub fn require_api_url(&self) -> Result<&str> {
        let raw = self.api_url.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "API URL required.\n\n\
                 Set it with one of:\n  \
                 1. --api-url <URL>\n  \
                 2. ZONEPULL_API_URL environment variable\n  \
                 3. zonepull config set api_url <URL>"
            )
        })?;

        let url = Url::parse(raw).map_err(|e| anyhow::anyhow!("invalid API URL {raw}: {e}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("invalid API URL {raw}: expected an http(s) URL");
        }

        Ok(raw)
    }

    /// Resolve the account username from the positional argument, the
    /// environment (via clap), or the config file.
    pub fn resolve_username(&self, positional: Option<String>) -> Result<String> {
        positional
            .or_else(|| self.config_username.clone())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Username required.\n\n\
                     Provide it with one of:\n  \
                     1. zonepull export <USERNAME>\n  \
                     2. ZONEPULL_USERNAME environment variable\n  \
                     3. zonepull config set username <NAME>"
                )
            })
    }
}
