use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::validate::{ContactFields, ContactMessage};

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("could not reach the email relay: {0}")]
    Network(String),
    #[error("email relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("email relay is not available here")]
    Unavailable,
}

/// Outbound mail service the contact form hands validated messages to.
pub trait MessageRelay {
    fn send(&self, message: &ContactMessage) -> impl Future<Output = Result<(), RelayError>>;
}

/// EmailJS account identifiers. These are public by design of the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub endpoint: String,
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
}

impl RelayConfig {
    /// Build-time overrides via `EMAILJS_PUBLIC_KEY`, `EMAILJS_SERVICE_ID`
    /// and `EMAILJS_TEMPLATE_ID`.
    pub fn from_env() -> Self {
        Self {
            endpoint: EMAILJS_ENDPOINT.to_string(),
            public_key: option_env!("EMAILJS_PUBLIC_KEY")
                .unwrap_or("scoq4j10FSdYZp8BB")
                .to_string(),
            service_id: option_env!("EMAILJS_SERVICE_ID")
                .unwrap_or("service_pfwbh5u")
                .to_string(),
            template_id: option_env!("EMAILJS_TEMPLATE_ID")
                .unwrap_or("template_gv7q564")
                .to_string(),
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Request body of the EmailJS `email/send` endpoint.
#[derive(Debug, Serialize)]
pub struct EmailJsPayload<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactFields,
}

impl<'a> EmailJsPayload<'a> {
    pub fn new(config: &'a RelayConfig, message: &'a ContactMessage) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: message.fields(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }
}

impl MessageRelay for EmailJsRelay {
    #[cfg(feature = "hydrate")]
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        use gloo_net::http::Request;

        let payload = EmailJsPayload::new(&self.config, message);
        let response = Request::post(&self.config.endpoint)
            .json(&payload)
            .map_err(|e| RelayError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        if response.ok() {
            log::info!("contact message sent ({})", response.status());
            return Ok(());
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::error!("contact message rejected: {status} {body}");
        Err(RelayError::Rejected { status, body })
    }

    #[cfg(not(feature = "hydrate"))]
    async fn send(&self, _message: &ContactMessage) -> Result<(), RelayError> {
        Err(RelayError::Unavailable)
    }
}
