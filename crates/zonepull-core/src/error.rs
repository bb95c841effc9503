use thiserror::Error;

use crate::types::RecordType;

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while exporting zones
#[derive(Error, Debug)]
pub enum ExportError {
    /// Authentication failed - the provider rejected the credentials
    #[error("authentication failed: invalid username or password")]
    Unauthorized,

    /// API returned an error response
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the API
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An MX or SRV record arrived without its priority/weight value
    #[error("{record_type} record for {fullname} has no priority value")]
    MissingPriority {
        /// Fully qualified name of the offending record
        fullname: String,
        /// Record type (MX or SRV)
        record_type: RecordType,
    },

    /// Fetching one domain's records failed
    #[error("failed to fetch records for {domain}")]
    DomainFetch {
        /// Name of the domain whose record fetch failed
        domain: String,
        /// Underlying provider error
        #[source]
        source: Box<ExportError>,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl ExportError {
    /// Returns true if the error is due to authentication
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Returns true if the error is a malformed-record error
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        matches!(self, Self::MissingPriority { .. })
    }

    /// Returns the affected domain name for per-domain failures
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        match self {
            Self::DomainFetch { domain, .. } => Some(domain),
            _ => None,
        }
    }
}
