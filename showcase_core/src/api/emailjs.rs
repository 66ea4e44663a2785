//! EmailJS REST client.
//!
//! `POST {api_url}/api/v1.0/email/send` with the service id, template id,
//! public key (`user_id`) and template parameters. A 2xx answer carries a
//! short text such as `OK`; anything else is a rejection.

use super::{http_client, RelayClient, TemplateParams};
use crate::debug_module;
use crate::utils::config::RelayConfig;
use crate::utils::error::RelayError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

#[derive(Clone)]
pub struct EmailJsRelay {
    client: Client,
    endpoint: String,
    service_id: String,
    public_key: String,
}

impl EmailJsRelay {
    /// Builds a relay on the shared HTTP client. Fails if any identifier
    /// in `config` is blank.
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        Self::with_client(config, http_client::get_relay_client().clone())
    }

    pub fn with_client(config: &RelayConfig, client: Client) -> Result<Self, RelayError> {
        if let Some(field) = config.missing_field() {
            return Err(RelayError::NotConfigured(field));
        }
        Ok(Self {
            client,
            endpoint: format!("{}/api/v1.0/email/send", config.api_url.trim_end_matches('/')),
            service_id: config.service_id.clone(),
            public_key: config.effective_public_key().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RelayClient for EmailJsRelay {
    async fn send(&self, template_id: &str, params: &TemplateParams) -> Result<String, RelayError> {
        debug_module!("RELAY", "Sending template {} via {}", template_id, self.endpoint);

        let body = SendRequest {
            service_id: &self.service_id,
            template_id,
            user_id: &self.public_key,
            template_params: params,
        };

        let response = self.client.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            tracing::debug!(template_id, %status, "relay accepted message");
            Ok(text)
        } else {
            tracing::warn!(template_id, %status, body = %text, "relay rejected message");
            Err(RelayError::Rejected {
                status: status.as_u16(),
                body: text,
            })
        }
    }

    fn relay_name(&self) -> &'static str {
        "EmailJS"
    }
}
