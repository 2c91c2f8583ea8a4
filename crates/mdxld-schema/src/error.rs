//! Schema lookup error types.

use crate::config::ConfigError;

/// Errors from resolving a type definition.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// HTTP transport error (connection refused, timeout, TLS).
    #[error("HTTP error calling {url}: {source}")]
    Http { url: String, source: reqwest::Error },
    /// The definition endpoint returned a non-2xx status.
    #[error("{url} returned {status}: {reason}")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },
    /// The response arrived but could not be read as a definition.
    #[error("failed to parse definition from {url}: {reason}")]
    Parse { url: String, reason: String },
    /// The type URI has no usable local name.
    #[error("invalid type URI: {0}")]
    InvalidTypeUri(String),
    /// The type URI is outside the vocabularies this crate can resolve.
    #[error("unsupported schema type: {0}")]
    UnsupportedType(String),
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SchemaError {
    /// For failures of the fetch itself, the short reason shown to users:
    /// the status reason phrase (`Not Found`), or the transport error text.
    pub fn fetch_reason(&self) -> Option<String> {
        match self {
            Self::Status { reason, .. } => Some(reason.clone()),
            Self::Http { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_exposes_reason_phrase() {
        let err = SchemaError::Status {
            url: "https://schema.org/Nope".into(),
            status: 404,
            reason: "Not Found".into(),
        };
        assert_eq!(err.fetch_reason().as_deref(), Some("Not Found"));
        assert_eq!(err.to_string(), "https://schema.org/Nope returned 404: Not Found");
    }

    #[test]
    fn parse_error_is_not_a_fetch_failure() {
        let err = SchemaError::Parse {
            url: "u".into(),
            reason: "expected value".into(),
        };
        assert_eq!(err.fetch_reason(), None);
    }
}
