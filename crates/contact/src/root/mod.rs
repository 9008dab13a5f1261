use std::sync::Arc;

use crate::{DeliverySettings, EmailDelivery, Field, FieldErrors, FormState};

mod submit_form;

pub use submit_form::SubmitOutcome;

/// Owns the values of one form session and the errors of its last submit.
#[derive(Clone)]
pub struct ContactForm {
    settings: DeliverySettings,
    delivery: Arc<dyn EmailDelivery>,
    state: FormState,
    errors: FieldErrors,
}

impl ContactForm {
    pub fn new(settings: DeliverySettings, delivery: Arc<dyn EmailDelivery>) -> Self {
        Self {
            settings,
            delivery,
            state: FormState::default(),
            errors: FieldErrors::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn settings(&self) -> &DeliverySettings {
        &self.settings
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.state.set(field, value);
    }
}
