//! The export pipeline: list the account's domains once, then fetch and
//! render each zone in provider order.

use tracing::debug;

use crate::error::{ExportError, Result};
use crate::provider::ProviderApi;
use crate::types::{Credentials, Domain};
use crate::zone;

/// One rendered zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneBlock {
    /// The domain this block belongs to.
    pub domain: Domain,
    /// The rendered lines, ending with one empty line.
    pub lines: Vec<String>,
}

/// An in-progress account export.
///
/// [`ZoneExport::begin`] performs the single `listDomains` call; nothing
/// else is fetched until [`ZoneExport::next_zone`] is polled, and at most
/// one provider call is in flight at any time. Zones come out in the exact
/// order the provider listed the domains, and nothing is retried.
#[derive(Debug)]
pub struct ZoneExport<P> {
    provider: P,
    credentials: Credentials,
    domains: Vec<Domain>,
    cursor: usize,
}

impl<P: ProviderApi> ZoneExport<P> {
    /// Starts an export by listing the account's domains.
    ///
    /// A failure here means the export produced no output at all; callers
    /// can safely delay opening their destination until `begin` returns.
    pub async fn begin(provider: P, credentials: Credentials) -> Result<Self> {
        let domains = provider.list_domains(&credentials).await?;
        debug!(domains = domains.len(), "listed account domains");
        Ok(Self {
            provider,
            credentials,
            domains,
            cursor: 0,
        })
    }

    /// The account's domains in provider order.
    #[must_use]
    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    /// Number of domains not yet yielded.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.domains.len() - self.cursor
    }

    /// Fetches and renders the next zone.
    ///
    /// Returns `None` once every domain has been yielded. Any error fuses
    /// the pipeline: later domains are never fetched, so the blocks yielded
    /// before the error are the complete output of a failed export.
    pub async fn next_zone(&mut self) -> Option<Result<ZoneBlock>> {
        let domain = self.domains.get(self.cursor)?.clone();
        match self.fetch_zone(domain).await {
            Ok(block) => {
                self.cursor += 1;
                Some(Ok(block))
            }
            Err(err) => {
                self.cursor = self.domains.len();
                Some(Err(err))
            }
        }
    }

    async fn fetch_zone(&self, domain: Domain) -> Result<ZoneBlock> {
        debug!(domain = %domain.name, id = %domain.id, "fetching records");
        let records = self
            .provider
            .list_records(&self.credentials, &domain.id)
            .await
            .map_err(|err| ExportError::DomainFetch {
                domain: domain.name.clone(),
                source: Box::new(err),
            })?;
        let lines = zone::render_zone(&domain, &records)?;
        Ok(ZoneBlock { domain, lines })
    }

    /// Renders the whole account as one flat line sequence.
    ///
    /// Blocks appear in domain order with one empty separator line before
    /// every block after the first. On error the partial output is dropped
    /// and the error returned.
    pub async fn collect_lines(mut self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        while let Some(block) = self.next_zone().await {
            let block = block?;
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.extend(block.lines);
        }
        Ok(lines)
    }
}
