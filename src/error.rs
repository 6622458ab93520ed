//! Error types for rusty-sbpfx

use crate::currency::Currency;
use thiserror::Error;

/// Main error type for rusty-sbpfx
#[derive(Error, Debug)]
pub enum SbpError {
    #[error(
        "could not find CURRENCY or READY headers (CURRENCY found: {currency}, READY found: {ready})"
    )]
    HeadersNotFound { currency: bool, ready: bool },

    #[error("no exchange rates found in PDF")]
    NoRatesFound,

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("PDF not found: status {status} for path: {path}")]
    RateSheetNotFound { status: u16, path: String },

    #[error("exchange rate for {0} not found")]
    RateNotFound(Currency),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Invalid date format '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl SbpError {
    /// True when the document was fetched but its layout could not be parsed.
    ///
    /// A caller seeing this may want to retry with a different date rather
    /// than re-fetch the same document.
    pub fn is_layout_error(&self) -> bool {
        matches!(
            self,
            SbpError::HeadersNotFound { .. } | SbpError::NoRatesFound
        )
    }
}

/// Result type alias for rusty-sbpfx operations
pub type Result<T> = std::result::Result<T, SbpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_errors() {
        assert!(SbpError::NoRatesFound.is_layout_error());
        assert!(SbpError::HeadersNotFound {
            currency: true,
            ready: false
        }
        .is_layout_error());
        assert!(!SbpError::Http("timeout".to_string()).is_layout_error());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SbpError = io.into();
        assert!(matches!(err, SbpError::Io(_)));
    }
}
