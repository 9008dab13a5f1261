use async_trait::async_trait;
use contactdesk_contact::{DeliveryError, DeliverySettings, EmailDelivery, TemplateParams};

/// Writes submissions to the log instead of sending them
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDelivery;

#[async_trait]
impl EmailDelivery for LogDelivery {
    async fn send(
        &self,
        settings: &DeliverySettings,
        params: &TemplateParams,
    ) -> Result<String, DeliveryError> {
        tracing::info!(
            service_id = %settings.service_id,
            template_id = %settings.template_id,
            name = %params.user_name,
            email = %params.user_email,
            subject = %params.user_subject,
            query_type = %params.query_type,
            address = %params.address,
            message = %params.message,
            "Contact message received (log delivery)"
        );

        Ok("OK".to_owned())
    }
}
