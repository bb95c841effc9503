//! HTTP client for the legacy DNS account API.
//!
//! This crate provides [`ApiClient`], the concrete [`zonepull_core::ProviderApi`]
//! implementation that speaks JSON over HTTPS to a host serving the two
//! legacy account operations, `listDomains` and `listRRsByDomain`.

#![doc(html_root_url = "https://docs.rs/zonepull-client/0.1.0")]

mod client;

pub use client::{ApiClient, ApiClientBuilder};
pub use zonepull_core::{ExportError, Result};
