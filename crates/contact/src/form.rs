use std::{collections::BTreeMap, str::FromStr, sync::LazyLock};

use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{Address, Field, QueryType};

// Browsers count U+FEFF as whitespace; Unicode `\s` does not.
static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$").unwrap()
});

/// Field name to human readable message. A field only appears while invalid.
pub type FieldErrors = BTreeMap<Field, String>;

/// Values currently typed or selected in the form.
#[derive(Validate, Default, Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    #[validate(custom(function = "not_blank", message = "Full Name is required"))]
    pub full_name: String,
    #[validate(regex(path = *RE_EMAIL, message = "Invalid email format"))]
    pub email: String,
    #[validate(custom(function = "not_blank", message = "Subject is required"))]
    pub subject: String,
    #[validate(custom(function = "not_blank", message = "Message cannot be empty"))]
    pub message: String,
    #[validate(custom(function = "known_query_type", message = "Please select a query type"))]
    pub query_type: String,
    #[validate(custom(function = "known_address", message = "Please select an address"))]
    pub address: String,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
            Field::QueryType => &self.query_type,
            Field::Address => &self.address,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
            Field::QueryType => &mut self.query_type,
            Field::Address => &mut self.address,
        };

        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
    {
        return Err(ValidationError::new("blank"));
    }

    Ok(())
}

fn known_query_type(value: &str) -> Result<(), ValidationError> {
    QueryType::from_str(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("query_type"))
}

fn known_address(value: &str) -> Result<(), ValidationError> {
    Address::from_str(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("address"))
}

/// Checks every rule against `state` and returns all violations.
///
/// An empty map means the form can be submitted. Rules never short-circuit,
/// so a blank form reports one message per field.
pub fn validate(state: &FormState) -> FieldErrors {
    match state.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errors) => to_field_errors(&errors),
    }
}

pub fn to_field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(name, errs)| {
            let field = Field::from_str(&name).ok()?;
            let err = errs.first()?;
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| err.code.to_string());

            Some((field, message))
        })
        .collect()
}
