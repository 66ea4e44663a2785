//! Outbound relay API for the contact form
//!
//! # Module Structure
//!
//! - `http_client` - Shared HTTP client with connection pooling
//! - `emailjs` - EmailJS REST implementation of [`RelayClient`]

pub mod emailjs;
pub mod http_client;

use crate::utils::error::RelayError;
use async_trait::async_trait;
use serde::Serialize;

/// Named fields substituted into a relay email template.
///
/// Key names match the templates configured with the relay service:
/// the message body travels as `title` and the timestamp as `time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub subject: String,
    #[serde(rename = "title")]
    pub message: String,
    #[serde(rename = "time")]
    pub timestamp: String,
}

/// A hosted service that renders a template and sends the email.
#[async_trait]
pub trait RelayClient: Send + Sync {
    /// Sends one templated email. Returns the service's acknowledgment text.
    async fn send(&self, template_id: &str, params: &TemplateParams) -> Result<String, RelayError>;

    /// Name for logs
    fn relay_name(&self) -> &'static str;
}
