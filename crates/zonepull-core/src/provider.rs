//! Abstract provider interface the export pipeline drives.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Credentials, Domain, Record};

/// The two account API operations the exporter needs.
///
/// Implementations authenticate every call with the supplied credentials
/// and must preserve the provider's ordering of domains and records; the
/// export output reproduces that order exactly.
#[async_trait]
pub trait ProviderApi {
    /// Lists every domain of the account.
    async fn list_domains(&self, credentials: &Credentials) -> Result<Vec<Domain>>;

    /// Lists the resource records of one domain by its provider id.
    async fn list_records(&self, credentials: &Credentials, domain_id: &str)
        -> Result<Vec<Record>>;
}
