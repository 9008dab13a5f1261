use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use contactdesk_contact::{
    ContactForm, DeliveryError, DeliverySettings, EmailDelivery, Field, TemplateParams,
};

#[derive(Default)]
pub struct RecordingDelivery {
    pub calls: Mutex<Vec<(DeliverySettings, TemplateParams)>>,
    pub fail_with: Option<String>,
}

impl RecordingDelivery {
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            calls: Mutex::default(),
            fail_with: Some(reason.into()),
        }
    }

    pub fn calls(&self) -> Vec<(DeliverySettings, TemplateParams)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailDelivery for RecordingDelivery {
    async fn send(
        &self,
        settings: &DeliverySettings,
        params: &TemplateParams,
    ) -> Result<String, DeliveryError> {
        self.calls
            .lock()
            .unwrap()
            .push((settings.clone(), params.clone()));

        match &self.fail_with {
            Some(reason) => Err(DeliveryError::Rejected {
                status: 400,
                text: reason.to_owned(),
            }),
            _ => Ok("OK".to_owned()),
        }
    }
}

pub fn settings() -> DeliverySettings {
    DeliverySettings {
        service_id: "service_contact".to_owned(),
        template_id: "template_contact".to_owned(),
        auth_id: "user_public_key".to_owned(),
    }
}

pub fn create_form(delivery: Arc<RecordingDelivery>) -> ContactForm {
    ContactForm::new(settings(), delivery)
}

pub fn fill_jane_doe(form: &mut ContactForm) {
    form.update_field(Field::FullName, "Jane Doe");
    form.update_field(Field::Email, "jane@example.com");
    form.update_field(Field::Subject, "Hi");
    form.update_field(Field::Message, "Hello");
    form.update_field(Field::QueryType, "support");
    form.update_field(Field::Address, "123 Main St, New York, NY");
}
