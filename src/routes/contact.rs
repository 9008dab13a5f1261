use std::str::FromStr;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::IntoResponse,
};
use contactdesk_contact::{
    Address, ContactForm, Field, FieldErrors, FormState, QueryType, SubmitOutcome,
};
use strum::VariantArray;

use crate::{routes::AppState, template::Template};

pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

pub struct Notice {
    pub kind: &'static str,
    pub message: &'static str,
    pub description: Option<&'static str>,
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub log_only: bool,
    pub form: FormState,
    pub errors: FieldErrors,
    pub notice: Option<Notice>,
    pub query_types: Vec<SelectOption>,
    pub addresses: Vec<SelectOption>,
}

impl ContactTemplate {
    pub fn new(
        template: &Template,
        form: FormState,
        errors: FieldErrors,
        notice: Option<Notice>,
    ) -> Self {
        let query_types = QueryType::VARIANTS
            .iter()
            .map(|q| {
                let value: &'static str = q.as_ref();
                SelectOption {
                    value,
                    label: q.label(),
                    selected: form.query_type == value,
                }
            })
            .collect();

        let addresses = Address::VARIANTS
            .iter()
            .map(|a| {
                let value: &'static str = a.as_ref();
                SelectOption {
                    value,
                    label: value,
                    selected: form.address == value,
                }
            })
            .collect();

        Self {
            log_only: template.log_only,
            form,
            errors,
            notice,
            query_types,
            addresses,
        }
    }

    fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ContactTemplate::new(
        &template,
        FormState::default(),
        FieldErrors::new(),
        None,
    ))
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<Vec<(String, String)>>,
) -> impl IntoResponse {
    let mut form = ContactForm::new(
        app_state.config.delivery.settings(),
        app_state.delivery.clone(),
    );

    for (name, value) in input {
        match Field::from_str(&name) {
            Ok(field) => form.update_field(field, value),
            Err(_) => tracing::debug!(name = %name, "Ignoring unknown contact form input"),
        }
    }

    match form.submit().await {
        SubmitOutcome::Invalid => template.render_with_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            ContactTemplate::new(
                &template,
                form.state().clone(),
                form.errors().clone(),
                None,
            ),
        ),
        SubmitOutcome::Sent { .. } => template.render(ContactTemplate::new(
            &template,
            FormState::default(),
            FieldErrors::new(),
            Some(Notice {
                kind: "success",
                message: "Message Sent Successfully!",
                description: None,
            }),
        )),
        SubmitOutcome::DeliveryFailed { draft, .. } => template.render_with_status(
            StatusCode::BAD_GATEWAY,
            ContactTemplate::new(
                &template,
                draft,
                FieldErrors::new(),
                Some(Notice {
                    kind: "error",
                    message: "Failed to Send Message",
                    description: Some("Your message was kept below, please try again later."),
                }),
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use askama::Template as _;

    use super::*;

    #[test]
    fn test_each_field_error_is_rendered() -> anyhow::Result<()> {
        let errors: FieldErrors = Field::VARIANTS
            .iter()
            .map(|field| (*field, format!("{} went wrong", field.label())))
            .collect();

        let html = ContactTemplate::new(
            &Template { log_only: false },
            FormState::default(),
            errors,
            None,
        )
        .render()?;

        for field in Field::VARIANTS {
            assert!(
                html.contains(&format!("<p class=\"error\">{} went wrong</p>", field.label())),
                "missing error for {field}"
            );
        }

        Ok(())
    }
}
