//! Email delivery collaborators for submitted contact forms

use std::sync::Arc;

use contactdesk_contact::EmailDelivery;

use crate::config::{Config, DeliveryBackend};

mod emailjs;
mod logging;
mod smtp;

pub use emailjs::EmailJsDelivery;
pub use logging::LogDelivery;
pub use smtp::SmtpDelivery;

/// Build the collaborator selected by `delivery.backend`
pub fn create_delivery(config: &Config) -> contactdesk_shared::Result<Arc<dyn EmailDelivery>> {
    let delivery: Arc<dyn EmailDelivery> = match config.delivery.backend {
        DeliveryBackend::EmailJs => Arc::new(EmailJsDelivery::new(&config.delivery)?),
        DeliveryBackend::Smtp => Arc::new(SmtpDelivery::new(&config.smtp)?),
        DeliveryBackend::Log => {
            tracing::warn!("No email provider configured, contact messages are only logged");
            Arc::new(LogDelivery)
        }
    };

    Ok(delivery)
}
