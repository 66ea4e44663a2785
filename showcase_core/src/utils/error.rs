//! Centralized error handling for DevShowcase
//!
//! - `thiserror` for the library error types below
//! - `anyhow` for configuration loading and the desktop binary
//!
//! # Usage
//!
//! ```rust,ignore
//! use showcase_core::utils::error::ResultExt;
//!
//! let config = std::fs::read_to_string(path).with_config_context("config.yaml")?;
//! ```

use thiserror::Error;

/// Core errors that can occur in DevShowcase
#[derive(Error, Debug)]
pub enum ShowcaseError {
    /// Relay dispatch errors
    #[error("Relay error: {0}")]
    Relay(#[from] RelayError),

    /// The typewriter was given nothing to type
    #[error("Typewriter needs at least one phrase")]
    NoPhrases,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Resume document missing or unreadable
    #[error("Resume not found: {0}")]
    ResumeNotFound(String),

    /// No download directory could be resolved for this user
    #[error("No download directory available")]
    NoDownloadDir,

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of a single call to the email relay service
#[derive(Error, Debug)]
pub enum RelayError {
    /// Relay identifiers or key are missing from the configuration
    #[error("Relay not configured: missing {0}")]
    NotConfigured(&'static str),

    /// Network failure before a response was received
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The relay answered with a non-success status
    #[error("Relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

impl RelayError {
    /// Short text suitable for the status line under the form.
    pub fn user_message(&self) -> String {
        match self {
            RelayError::NotConfigured(_) => {
                "Contact form is not configured. Please reach out by email instead.".to_string()
            }
            RelayError::Transport(_) => {
                "Could not reach the mail service. Check your connection and try again.".to_string()
            }
            RelayError::Rejected { status, .. } if *status >= 500 => {
                "The mail service is temporarily unavailable. Try again later.".to_string()
            }
            RelayError::Rejected { .. } => {
                "Oops! Your message was not sent. Try again!".to_string()
            }
        }
    }
}

/// Result type alias for DevShowcase operations
pub type ShowcaseResult<T> = anyhow::Result<T>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add file operation context to an error
    fn with_file_context(self, path: &str) -> ShowcaseResult<T>;

    /// Add configuration context to an error
    fn with_config_context(self, setting: &str) -> ShowcaseResult<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for Result<T, E> {
    fn with_file_context(self, path: &str) -> ShowcaseResult<T> {
        use anyhow::Context;
        self.map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("File operation failed: {}", path))
    }

    fn with_config_context(self, setting: &str) -> ShowcaseResult<T> {
        use anyhow::Context;
        self.map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("Configuration error for: {}", setting))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showcase_error_display() {
        let err = ShowcaseError::Config("bad shape".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(ShowcaseError::NoPhrases.to_string().contains("phrase"));
    }

    #[test]
    fn test_relay_error_display() {
        let err = RelayError::Rejected {
            status: 400,
            body: "The user ID is invalid".to_string(),
        };
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("user ID"));

        let err = RelayError::NotConfigured("public_key");
        assert!(err.to_string().contains("public_key"));
    }

    #[test]
    fn test_user_message_distinguishes_server_errors() {
        let server = RelayError::Rejected { status: 502, body: String::new() };
        let client = RelayError::Rejected { status: 412, body: String::new() };
        assert!(server.user_message().contains("temporarily"));
        assert!(client.user_message().contains("not sent"));
    }

    #[test]
    fn test_relay_error_converts_into_showcase_error() {
        let err: ShowcaseError = RelayError::NotConfigured("service_id").into();
        assert!(matches!(err, ShowcaseError::Relay(_)));
    }

    #[test]
    fn test_result_ext_file_context() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"));

        let with_context = result.with_file_context("resume.pdf");
        let err_string = format!("{:?}", with_context.unwrap_err());
        assert!(err_string.contains("resume.pdf"));
    }
}
