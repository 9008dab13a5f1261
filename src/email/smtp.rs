//! SMTP delivery using lettre

use askama::Template;
use async_trait::async_trait;
use contactdesk_contact::{DeliveryError, DeliverySettings, EmailDelivery, TemplateParams};
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use tracing::info;

use crate::config::{SmtpConfig, SmtpTls};

#[derive(Template)]
#[template(path = "emails/contact.txt")]
struct ContactEmailTemplate<'a> {
    params: &'a TemplateParams,
}

/// Relays the form to a fixed support mailbox
#[derive(Clone)]
pub struct SmtpDelivery {
    mailer: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpDelivery {
    pub fn new(config: &SmtpConfig) -> contactdesk_shared::Result<Self> {
        let Ok(from) = config.from_address.parse::<Mailbox>() else {
            contactdesk_shared::bail!("invalid SMTP from_address {}", config.from_address);
        };
        let Ok(to) = config.to_address.parse::<Mailbox>() else {
            contactdesk_shared::bail!("invalid SMTP to_address {}", config.to_address);
        };

        let mailer = if config.username.is_empty() || config.password.is_empty() {
            info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.host)
                .port(config.port)
                .build()
        } else {
            info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                tls = ?config.tls,
                to = %to,
                "SMTP delivery initialized with authentication and TLS"
            );
            let creds = Credentials::new(config.username.clone(), config.password.clone());
            let builder = match config.tls {
                SmtpTls::StartTls => SmtpTransport::starttls_relay(&config.host),
                SmtpTls::Wrapper => SmtpTransport::relay(&config.host),
            };

            builder
                .map_err(anyhow::Error::from)?
                .port(config.port)
                .credentials(creds)
                .build()
        };

        Ok(Self { mailer, from, to })
    }

    fn build_message(&self, params: &TemplateParams) -> Result<Message, DeliveryError> {
        let body = ContactEmailTemplate { params }
            .render()
            .map_err(|e| DeliveryError::Transport(format!("failed to render email: {e}")))?;

        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(format!("[{}] {}", params.query_type, params.user_subject));

        if let Ok(reply_to) = params.user_email.parse::<Mailbox>() {
            builder = builder.reply_to(reply_to);
        }

        builder
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| DeliveryError::Transport(format!("failed to build email: {e}")))
    }
}

#[async_trait]
impl EmailDelivery for SmtpDelivery {
    async fn send(
        &self,
        settings: &DeliverySettings,
        params: &TemplateParams,
    ) -> Result<String, DeliveryError> {
        let email = self.build_message(params)?;
        let mailer = self.mailer.clone();

        tracing::debug!(
            service_id = %settings.service_id,
            template_id = %settings.template_id,
            to = %self.to,
            "Relaying contact message over SMTP"
        );

        tokio::task::spawn_blocking(move || mailer.send(&email))
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?
            .map_err(|e| DeliveryError::Transport(format!("SMTP error: {e}")))?;

        Ok("OK".to_owned())
    }
}
