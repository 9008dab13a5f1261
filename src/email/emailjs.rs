//! EmailJS REST delivery

use std::time::Duration;

use async_trait::async_trait;
use contactdesk_contact::{DeliveryError, DeliverySettings, EmailDelivery, TemplateParams};
use serde::Serialize;

use crate::config::DeliveryConfig;

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// Sends the form through the EmailJS `email/send` endpoint
#[derive(Clone)]
pub struct EmailJsDelivery {
    client: reqwest::Client,
    endpoint: String,
}

impl EmailJsDelivery {
    pub fn new(config: &DeliveryConfig) -> contactdesk_shared::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(anyhow::Error::from)?;

        tracing::info!(
            endpoint = %config.endpoint,
            service_id = %config.service_id,
            template_id = %config.template_id,
            "EmailJS delivery initialized"
        );

        Ok(Self {
            client,
            endpoint: config.endpoint.to_owned(),
        })
    }
}

#[async_trait]
impl EmailDelivery for EmailJsDelivery {
    async fn send(
        &self,
        settings: &DeliverySettings,
        params: &TemplateParams,
    ) -> Result<String, DeliveryError> {
        let body = SendRequest {
            service_id: &settings.service_id,
            template_id: &settings.template_id,
            user_id: &settings.auth_id,
            template_params: params,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                text,
            });
        }

        Ok(text)
    }
}
