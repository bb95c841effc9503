//! zonepull - DNS zone export tool
//!
//! Exports every zone of a DNS hosting account as zone-file text.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    zonepull_cli::run().await
}
