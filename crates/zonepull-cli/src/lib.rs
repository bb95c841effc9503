//! # zonepull-cli
//!
//! Command-line interface for exporting DNS zones from a legacy account API.
//!
//! ## Features
//!
//! - **Full account export**: every domain, every record, as zone-file text
//! - **Safe output handling**: the output file is only created after login succeeds
//! - **Redirect awareness**: provider HTTP redirects land in a zone comment section
//! - **Config file**: remembers the API URL and username between runs

pub mod cli;
pub mod config;

pub use cli::run;
