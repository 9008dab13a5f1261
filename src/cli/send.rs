use clap::Args;
use contactdesk::config::Config;
use contactdesk_contact::{ContactForm, Field, SubmitOutcome};

#[derive(Args, Debug, Default)]
pub struct SendArgs {
    /// Sender full name
    #[arg(long, default_value = "")]
    pub full_name: String,

    /// Sender email address
    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub subject: String,

    #[arg(long, default_value = "")]
    pub message: String,

    /// One of: support, sales, feedback
    #[arg(long, default_value = "")]
    pub query_type: String,

    /// One of the addresses offered on the contact page
    #[arg(long, default_value = "")]
    pub address: String,
}

impl SendArgs {
    fn into_values(self) -> [(Field, String); 6] {
        [
            (Field::FullName, self.full_name),
            (Field::Email, self.email),
            (Field::Subject, self.subject),
            (Field::Message, self.message),
            (Field::QueryType, self.query_type),
            (Field::Address, self.address),
        ]
    }
}

/// Submit one contact form from the command line with the configured provider
pub async fn send(config: Config, args: SendArgs) -> anyhow::Result<()> {
    let delivery = contactdesk::email::create_delivery(&config)?;
    let mut form = ContactForm::new(config.delivery.settings(), delivery);

    for (field, value) in args.into_values() {
        form.update_field(field, value);
    }

    match form.submit().await {
        SubmitOutcome::Invalid => {
            for (field, message) in form.errors() {
                tracing::error!(field = %field, "{}: {message}", field.label());
            }

            anyhow::bail!("contact form has {} invalid field(s)", form.errors().len())
        }
        SubmitOutcome::Sent { response } => {
            tracing::info!(response = %response, "Message Sent Successfully!");

            Ok(())
        }
        SubmitOutcome::DeliveryFailed { reason, .. } => {
            anyhow::bail!("Failed to Send Message: {reason}")
        }
    }
}
