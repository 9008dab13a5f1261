use async_trait::async_trait;
use serde::Serialize;

use crate::FormState;

/// Identifiers handed verbatim to the email provider on every send.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeliverySettings {
    pub service_id: String,
    pub template_id: String,
    pub auth_id: String,
}

/// Form values under the parameter names the provider template expects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub user_name: String,
    pub user_email: String,
    pub user_subject: String,
    pub message: String,
    pub query_type: String,
    pub address: String,
}

impl From<&FormState> for TemplateParams {
    fn from(state: &FormState) -> Self {
        Self {
            user_name: state.full_name.to_owned(),
            user_email: state.email.to_owned(),
            user_subject: state.subject.to_owned(),
            message: state.message.to_owned(),
            query_type: state.query_type.to_owned(),
            address: state.address.to_owned(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("provider rejected the message ({status}): {text}")]
    Rejected { status: u16, text: String },

    #[error("{0}")]
    Transport(String),
}

/// The service that actually transmits a submitted form.
#[async_trait]
pub trait EmailDelivery: Send + Sync {
    /// Returns the provider's response text on success.
    async fn send(
        &self,
        settings: &DeliverySettings,
        params: &TemplateParams,
    ) -> Result<String, DeliveryError>;
}
