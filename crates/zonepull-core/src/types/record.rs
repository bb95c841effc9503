use std::fmt;

use serde::{Deserialize, Serialize};

/// DNS record types as the account API reports them.
///
/// The set is open: the provider owns the vocabulary, so unrecognized
/// spellings are preserved in [`RecordType::Other`] and rendered verbatim.
/// Matching is case-sensitive because the formatting rules key off the
/// provider's canonical uppercase tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordType {
    /// IPv4 address
    A,
    /// IPv6 address
    Aaaa,
    /// Canonical name (alias)
    Cname,
    /// Mail exchanger
    Mx,
    /// Authoritative name server
    Ns,
    /// Text record
    Txt,
    /// Service locator
    Srv,
    /// Record-level start of authority
    Soa,
    /// Provider HTTP redirect pseudo-record
    Redirect,
    /// Any type this tool does not special-case
    Other(String),
}

impl RecordType {
    /// Returns the zone-file spelling of the type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Txt => "TXT",
            Self::Srv => "SRV",
            Self::Soa => "SOA",
            Self::Redirect => "REDIRECT",
            Self::Other(s) => s,
        }
    }

    /// Returns true for types whose data carries a leading priority value.
    #[must_use]
    pub const fn requires_priority(&self) -> bool {
        matches!(self, Self::Mx | Self::Srv)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for RecordType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "A" => Self::A,
            "AAAA" => Self::Aaaa,
            "CNAME" => Self::Cname,
            "MX" => Self::Mx,
            "NS" => Self::Ns,
            "TXT" => Self::Txt,
            "SRV" => Self::Srv,
            "SOA" => Self::Soa,
            "REDIRECT" => Self::Redirect,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for RecordType {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

impl From<RecordType> for String {
    fn from(record_type: RecordType) -> Self {
        record_type.as_str().to_owned()
    }
}

/// One resource record as returned by `listRRsByDomain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Fully qualified record name without a trailing dot
    pub fullname: String,
    /// Provider type tag
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Time to live in seconds
    #[serde(deserialize_with = "super::de::u32_lenient")]
    pub ttl: u32,
    /// Record payload: address, target host, text, or redirect target URL
    pub data: String,
    /// Priority (MX) or weight (SRV); absent for other types
    #[serde(default, deserialize_with = "super::de::opt_u32_lenient")]
    pub aux: Option<u32>,
}

/// One HTTP redirect extracted from a `REDIRECT` pseudo-record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectEntry {
    /// Source URL derived from the record name
    pub source_url: String,
    /// Target URL the provider redirects to
    pub target_url: String,
}
