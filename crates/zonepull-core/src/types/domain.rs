use serde::{Deserialize, Serialize};

/// One domain of the account as returned by `listDomains`.
///
/// The SOA-related numbers come straight from the provider and are emitted
/// into the synthesized SOA line without interpretation. `ns` and `mbox`
/// are emitted exactly as supplied, so whether they carry a trailing dot is
/// the provider's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// Domain name without a trailing dot
    pub name: String,
    /// Opaque identifier used when fetching the domain's records
    #[serde(deserialize_with = "super::de::string_lenient")]
    pub id: String,
    /// Zone default TTL in seconds
    #[serde(deserialize_with = "super::de::u32_lenient")]
    pub ttl: u32,
    /// Primary name server
    pub ns: String,
    /// Responsible mailbox
    pub mbox: String,
    /// Zone serial number
    #[serde(deserialize_with = "super::de::u32_lenient")]
    pub serial: u32,
    /// SOA refresh interval in seconds
    #[serde(deserialize_with = "super::de::u32_lenient")]
    pub refresh: u32,
    /// SOA retry interval in seconds
    #[serde(deserialize_with = "super::de::u32_lenient")]
    pub retry: u32,
    /// SOA expire interval in seconds
    #[serde(deserialize_with = "super::de::u32_lenient")]
    pub expire: u32,
    /// Account expiry timestamp, emitted verbatim in the zone header
    pub expires: String,
}
