use contactdesk_contact::{Field, FormState, validate};
use strum::VariantArray;

fn jane_doe() -> FormState {
    FormState {
        full_name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        subject: "Hi".to_owned(),
        message: "Hello".to_owned(),
        query_type: "support".to_owned(),
        address: "123 Main St, New York, NY".to_owned(),
    }
}

#[test]
fn test_valid_form_has_no_errors() {
    assert!(validate(&jane_doe()).is_empty());
}

#[test]
fn test_each_missing_field_reports_only_itself() {
    for field in Field::VARIANTS {
        let mut state = jane_doe();
        state.set(*field, "");

        let errors = validate(&state);
        assert_eq!(errors.len(), 1, "{field} should be the only error");
        assert!(errors.contains_key(field));
    }
}

#[test]
fn test_blank_form_reports_every_field() {
    let errors = validate(&FormState::default());

    assert_eq!(errors.len(), 6);
    assert_eq!(errors[&Field::FullName], "Full Name is required");
    assert_eq!(errors[&Field::Email], "Invalid email format");
    assert_eq!(errors[&Field::Subject], "Subject is required");
    assert_eq!(errors[&Field::Message], "Message cannot be empty");
    assert_eq!(errors[&Field::QueryType], "Please select a query type");
    assert_eq!(errors[&Field::Address], "Please select an address");
}

#[test]
fn test_email_format() {
    let is_rejected = |email: &str| {
        let mut state = jane_doe();
        state.email = email.to_owned();
        validate(&state).contains_key(&Field::Email)
    };

    assert!(!is_rejected("a@b.co"));
    assert!(is_rejected("a@b"));
    assert!(is_rejected("ab.co"));
    assert!(is_rejected(""));
}

#[test]
fn test_whitespace_only_text_is_rejected() {
    let mut state = jane_doe();
    state.full_name = "   ".to_owned();
    state.subject = "\n".to_owned();
    state.message = " \t ".to_owned();

    let errors = validate(&state);
    assert_eq!(
        errors.keys().copied().collect::<Vec<_>>(),
        vec![Field::FullName, Field::Subject, Field::Message]
    );
}

#[test]
fn test_byte_order_mark_counts_as_whitespace() {
    let mut state = jane_doe();
    state.full_name = "\u{FEFF}".to_owned();
    state.subject = " \u{FEFF} ".to_owned();
    state.email = "a\u{FEFF}@b.co".to_owned();

    let errors = validate(&state);
    assert_eq!(
        errors.keys().copied().collect::<Vec<_>>(),
        vec![Field::FullName, Field::Email, Field::Subject]
    );

    state = jane_doe();
    state.full_name = "\u{FEFF}Jane".to_owned();
    assert!(validate(&state).is_empty());
}

#[test]
fn test_selection_outside_allowed_values_is_rejected() {
    let mut state = jane_doe();
    state.query_type = "billing".to_owned();
    state.address = "1 Nowhere Rd".to_owned();

    let errors = validate(&state);
    assert_eq!(errors.len(), 2);
    assert!(errors.contains_key(&Field::QueryType));
    assert!(errors.contains_key(&Field::Address));
}

#[test]
fn test_validate_is_idempotent() {
    let mut state = jane_doe();
    state.email = "nope".to_owned();

    assert_eq!(validate(&state), validate(&state));
    assert_eq!(state.email, "nope");
}
