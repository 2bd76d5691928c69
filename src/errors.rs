//! Unified error type for the client, plus the rule that collapses any failure
//! into the single message a panel shows.

use thiserror::Error;

/// Every failure the client can run into, from bad config to backend rejections.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// A form failed client-side validation
    #[error("{message}")]
    Validation {
        /// Human readable reason
        message: String,
    },

    /// A money value that cannot be used (negative, NaN, infinite)
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The offending value
        amount: f64,
    },

    /// The backend answered with a non-2xx status
    #[error("Backend returned {status}{}", .detail.as_ref().map_or_else(String::new, |d| format!(": {d}")))]
    Backend {
        /// HTTP status code
        status: u16,
        /// The `detail` field of the error body, if there was one
        detail: Option<String>,
    },

    /// Transport failure or an undecodable response body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON encoding/decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

impl Error {
    /// The message a panel displays for this failure.
    ///
    /// A backend-reported `detail` wins; anything else (network failure, other
    /// status codes, malformed bodies, validation) shows `fallback`, except
    /// validation errors which already carry user-facing text.
    #[must_use]
    pub fn panel_message(&self, fallback: &str) -> String {
        match self {
            Self::Backend {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Validation { message } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_message_prefers_backend_detail() {
        let err = Error::Backend {
            status: 400,
            detail: Some("Email already registered".to_string()),
        };
        assert_eq!(
            err.panel_message("Failed to create customer"),
            "Email already registered"
        );
    }

    #[test]
    fn test_panel_message_falls_back_without_detail() {
        let err = Error::Backend {
            status: 500,
            detail: None,
        };
        assert_eq!(err.panel_message("Delete failed"), "Delete failed");

        let err = Error::Config {
            message: "bad".to_string(),
        };
        assert_eq!(err.panel_message("Update failed"), "Update failed");
    }

    #[test]
    fn test_panel_message_keeps_validation_text() {
        let err = Error::Validation {
            message: "Select a customer".to_string(),
        };
        assert_eq!(err.panel_message("Failed to create order"), "Select a customer");
    }

    #[test]
    fn test_backend_display_includes_detail() {
        let err = Error::Backend {
            status: 404,
            detail: Some("Not found".to_string()),
        };
        assert_eq!(err.to_string(), "Backend returned 404: Not found");

        let err = Error::Backend {
            status: 502,
            detail: None,
        };
        assert_eq!(err.to_string(), "Backend returned 502");
    }
}
