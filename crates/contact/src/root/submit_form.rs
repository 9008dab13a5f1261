use crate::{FormState, TemplateParams, validate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are on the form and nothing was sent.
    Invalid,
    Sent {
        response: String,
    },
    /// The provider failed. `draft` holds the values that were sent so the
    /// caller can put them back in front of the user.
    DeliveryFailed {
        reason: String,
        draft: FormState,
    },
}

impl SubmitOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent { .. })
    }
}

impl super::ContactForm {
    pub async fn submit(&mut self) -> SubmitOutcome {
        let errors = validate(&self.state);
        if !errors.is_empty() {
            tracing::debug!(invalid = errors.len(), "contact form failed validation");
            self.errors = errors;

            return SubmitOutcome::Invalid;
        }

        self.errors.clear();

        // The form is emptied before the provider answers.
        let draft = std::mem::take(&mut self.state);
        let params = TemplateParams::from(&draft);

        match self.delivery.send(&self.settings, &params).await {
            Ok(response) => {
                tracing::info!(
                    service_id = %self.settings.service_id,
                    template_id = %self.settings.template_id,
                    response = %response,
                    "Message sent successfully"
                );

                SubmitOutcome::Sent { response }
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    service_id = %self.settings.service_id,
                    template_id = %self.settings.template_id,
                    "Failed to send message"
                );

                SubmitOutcome::DeliveryFailed {
                    reason: err.to_string(),
                    draft,
                }
            }
        }
    }
}
