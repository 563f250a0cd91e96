//! Error handling for whois-proxy

use thiserror::Error;

/// Message returned to callers when input does not look like a domain
pub const INVALID_DOMAIN_FORMAT: &str = "Invalid domain format";

/// Main error type for whois-proxy
#[derive(Error, Debug, Clone)]
pub enum WhoisProxyError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    #[error("Timeout error: {operation} timed out after {timeout_secs}s")]
    Timeout {
        operation: String,
        timeout_secs: u64,
    },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("No registration data for '{domain}' from {provider}")]
    NotFound { domain: String, provider: String },

    #[error("IO error: {message}")]
    Io { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl WhoisProxyError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// The validation error every malformed domain maps to
    pub fn invalid_domain() -> Self {
        Self::validation(INVALID_DOMAIN_FORMAT)
    }

    /// Create a network error
    pub fn network(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, timeout_secs: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_secs,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a not-found error for a provider
    pub fn not_found(domain: impl Into<String>, provider: impl Into<String>) -> Self {
        Self::NotFound {
            domain: domain.into(),
            provider: provider.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the caller supplied bad input
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Whether this error describes a single upstream being unavailable.
    ///
    /// These never reach a caller: the resolver moves on to the next
    /// provider or to the fallback table.
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Timeout { .. } | Self::Parse { .. } | Self::NotFound { .. }
        )
    }

    /// Message suitable for an API error body
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Convert from common error types
impl From<reqwest::Error> for WhoisProxyError {
    fn from(err: reqwest::Error) -> Self {
        let status_code = err.status().map(|s| s.as_u16());
        let url = err.url().map(|u| u.to_string());

        if err.is_timeout() {
            Self::network("Request timed out", status_code, url)
        } else if err.is_connect() {
            Self::network("Connection failed", status_code, url)
        } else if err.is_decode() {
            Self::parse(err.to_string())
        } else if err.is_request() {
            Self::network("Request failed", status_code, url)
        } else {
            Self::network(err.to_string(), status_code, url)
        }
    }
}

impl From<serde_json::Error> for WhoisProxyError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}

impl From<std::io::Error> for WhoisProxyError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WhoisProxyError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::WhoisProxyError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::WhoisProxyError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! internal_error {
    ($msg:expr) => {
        $crate::error::WhoisProxyError::internal($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::WhoisProxyError::internal(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(WhoisProxyError::invalid_domain().is_client_error());
        assert!(!WhoisProxyError::invalid_domain().is_provider_failure());

        assert!(WhoisProxyError::timeout("lookup", 10).is_provider_failure());
        assert!(WhoisProxyError::not_found("example.com", "jsonwhois").is_provider_failure());
        assert!(WhoisProxyError::network("boom", Some(503), None).is_provider_failure());
        assert!(WhoisProxyError::parse("bad json").is_provider_failure());

        assert!(!WhoisProxyError::internal("bug").is_provider_failure());
        assert!(!WhoisProxyError::internal("bug").is_client_error());
    }

    #[test]
    fn test_public_message() {
        assert_eq!(WhoisProxyError::invalid_domain().public_message(), "Invalid domain format");
        assert_eq!(
            WhoisProxyError::internal("task panicked").public_message(),
            "Internal error: task panicked"
        );
    }

    #[test]
    fn test_json_error_is_provider_failure() {
        let err: WhoisProxyError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert!(matches!(err, WhoisProxyError::Parse { .. }));
        assert!(err.is_provider_failure());
    }

    #[test]
    fn test_io_error_is_internal_fault() {
        let err: WhoisProxyError =
            std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use").into();
        assert!(matches!(err, WhoisProxyError::Io { .. }));
        assert!(!err.is_client_error());
        assert!(!err.is_provider_failure());
    }

    #[test]
    fn test_macros() {
        let err = config_error!("bad value {}", 42);
        assert!(err.to_string().contains("bad value 42"));

        let err = internal_error!("oops");
        assert!(matches!(err, WhoisProxyError::Internal { .. }));
    }
}
