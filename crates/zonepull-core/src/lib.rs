//! Core types and logic for the zonepull DNS zone exporter.
//!
//! This crate contains everything except the wire protocol:
//!
//! - **Types**: [`Domain`], [`Record`], [`Credentials`] and friends
//! - **Rendering**: [`format_record`] and [`render_zone`]
//! - **Pipeline**: [`ZoneExport`] driving any [`ProviderApi`] implementation
//! - **Errors**: the [`ExportError`] taxonomy
//!
//! # Example
//!
//! ```rust,ignore
//! use zonepull_core::{Credentials, ZoneExport};
//!
//! let export = ZoneExport::begin(client, Credentials::new("acme", "hunter2")).await?;
//! for line in export.collect_lines().await? {
//!     println!("{line}");
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/zonepull-core/0.1.0")]

mod error;
mod export;
mod provider;
pub mod types;
pub mod zone;

pub use error::{ExportError, Result};
pub use export::{ZoneBlock, ZoneExport};
pub use provider::ProviderApi;
pub use types::*;
pub use zone::{format_record, render_zone, FormattedRecord};
