//! Error types for Zenbox.

use std::string::FromUtf8Error;

/// Top-level error type for the service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Mail provider errors.
///
/// `Api` carries the provider's own error detail verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("Invalid response from provider: {reason}")]
    InvalidResponse { reason: String },
}

/// Message body decoding errors.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Invalid base64 body data: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Body is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Scan pipeline errors.
///
/// Decode failures never surface here: the offending message is skipped.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

/// Errors returned to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Authorization header missing.")]
    MissingAuth,

    #[error("Authorization header malformed.")]
    MalformedAuth,

    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts_into_top_level() {
        let err: Error = ConfigError::InvalidValue {
            key: "ZENBOX_PORT".into(),
            message: "not a number".into(),
        }
        .into();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid configuration value for ZENBOX_PORT: not a number"
        );
    }

    #[test]
    fn scan_error_keeps_provider_detail() {
        let err: Error = ScanError::from(ProviderError::Api {
            status: 403,
            body: "Forbidden".into(),
        })
        .into();
        assert_eq!(err.to_string(), "Scan error: HTTP 403: Forbidden");
    }
}
