// src/error.rs

//! Unified error handling for the quake feed client.

use std::fmt;

use thiserror::Error;

/// Result type alias for feed operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// URL parsed but is not http(s)
    #[error("Unsupported URL scheme '{0}'")]
    UnsupportedScheme(String),

    /// HTTP request failed (connect, timeout or body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with something other than 200
    #[error("Unexpected response code {status} from {url}")]
    Status { url: String, status: u16 },

    /// The feed body was empty or blank
    #[error("Empty feed response")]
    EmptyFeed,

    /// JSON deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Feed JSON did not have the expected shape
    #[error("Feed parse error: {0}")]
    Parse(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Coarse classification of an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Url,
    Network,
    Parse,
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Url => "url",
            ErrorKind::Network => "network",
            ErrorKind::Parse => "parse",
            ErrorKind::Config => "config",
        };
        f.write_str(name)
    }
}

impl AppError {
    /// Create a feed parse error.
    pub fn parse(message: impl fmt::Display) -> Self {
        Self::Parse(message.to_string())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Which part of the pipeline the error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Url(_) | AppError::UnsupportedScheme(_) => ErrorKind::Url,
            AppError::Http(_) | AppError::Status { .. } => ErrorKind::Network,
            AppError::EmptyFeed | AppError::Json(_) | AppError::Parse(_) => ErrorKind::Parse,
            AppError::Io(_) | AppError::Toml(_) | AppError::Validation(_) => ErrorKind::Config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        assert_eq!(AppError::from(url_err).kind(), ErrorKind::Url);
        assert_eq!(
            AppError::Status {
                url: "https://example.com".to_string(),
                status: 500
            }
            .kind(),
            ErrorKind::Network
        );
        assert_eq!(AppError::EmptyFeed.kind(), ErrorKind::Parse);
        assert_eq!(AppError::parse("missing features").kind(), ErrorKind::Parse);
        assert_eq!(AppError::validation("bad").kind(), ErrorKind::Config);
    }

    #[test]
    fn test_status_message() {
        let err = AppError::Status {
            url: "https://example.com/feed".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "Unexpected response code 404 from https://example.com/feed"
        );
    }
}
