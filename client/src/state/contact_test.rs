use super::*;

fn fields(name: &str, email: &str, message: &str) -> ContactFields {
    ContactFields {
        name: name.to_owned(),
        email: email.to_owned(),
        subject: String::new(),
        message: message.to_owned(),
    }
}

fn keys(errors: &FieldErrors) -> Vec<Field> {
    errors.keys().copied().collect()
}

// =============================================================
// validate
// =============================================================

#[test]
fn empty_form_flags_required_fields() {
    let errors = validate(&ContactFields::default());
    assert_eq!(keys(&errors), vec![Field::Name, Field::Email, Field::Message]);
    assert_eq!(errors[&Field::Name], "Name is required");
    assert_eq!(errors[&Field::Email], "Valid email required");
    assert_eq!(errors[&Field::Message], "Message is required");
}

#[test]
fn valid_form_has_no_errors() {
    assert!(validate(&fields("A", "a@b.com", "hi")).is_empty());
}

#[test]
fn bad_email_is_the_only_error() {
    let errors = validate(&fields("A", "not-an-email", "hi"));
    assert_eq!(keys(&errors), vec![Field::Email]);
}

#[test]
fn whitespace_only_counts_as_empty() {
    let errors = validate(&fields("   ", " \t", "\n"));
    assert_eq!(keys(&errors), vec![Field::Name, Field::Email, Field::Message]);
}

#[test]
fn email_shape_edge_cases() {
    for bad in ["a@b", "@b.com", "a@.com", "a b@c.com", "a@b@c.com"] {
        assert!(validate(&fields("A", bad, "hi")).contains_key(&Field::Email), "{bad}");
    }
    for good in ["x@y.io", "first.last@sub.example.org"] {
        assert!(validate(&fields("A", good, "hi")).is_empty(), "{good}");
    }
}

#[test]
fn padded_email_is_rejected() {
    for padded in [" a@b.com", "a@b.com ", "  first.last@sub.example.org  ", "\ta@b.com"] {
        let errors = validate(&fields("A", padded, "hi"));
        assert_eq!(keys(&errors), vec![Field::Email], "{padded:?}");
    }
}

#[test]
fn email_pattern_compiles() {
    assert!(Regex::new(EMAIL_PATTERN).is_ok());
    assert!(EMAIL_SHAPE.is_ok());
}

#[test]
fn subject_is_optional() {
    let mut f = fields("A", "a@b.com", "hi");
    f.subject = String::new();
    assert!(validate(&f).is_empty());
}

// =============================================================
// Field
// =============================================================

#[test]
fn field_ids() {
    assert_eq!(Field::Name.dom_id(), "contact-name");
    assert_eq!(Field::Email.error_id(), "email-error");
    assert_eq!(Field::ALL.map(Field::as_str), ["name", "email", "subject", "message"]);
}

#[test]
fn field_serializes_lowercase() {
    let mut errors = FieldErrors::new();
    errors.insert(Field::Message, MESSAGE_REQUIRED);
    let json = serde_json::to_string(&errors).unwrap();
    assert_eq!(json, r#"{"message":"Message is required"}"#);
}

#[test]
fn payload_tolerates_missing_keys() {
    let parsed: ContactFields = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
    assert_eq!(parsed.name, "A");
    assert!(parsed.subject.is_empty());
}

// =============================================================
// Submit lifecycle
// =============================================================

#[test]
fn begin_submit_stores_errors() {
    let mut state = ContactFormState::default();
    assert_eq!(state.begin_submit(), None);
    assert!(!state.loading);
    assert_eq!(state.field_error(Field::Name), Some(NAME_REQUIRED));
    assert_eq!(state.field_error(Field::Subject), None);
}

#[test]
fn begin_submit_returns_payload_and_blocks_resubmit() {
    let mut state = ContactFormState::default();
    state.set_field(Field::Name, "A".into());
    state.set_field(Field::Email, "a@b.com".into());
    state.set_field(Field::Message, "hi".into());

    let payload = state.begin_submit().unwrap();
    assert_eq!(payload, state.fields);
    assert!(state.loading);
    assert!(state.errors.is_empty());
    assert_eq!(state.begin_submit(), None);
}

#[test]
fn errors_clear_once_fixed() {
    let mut state = ContactFormState::default();
    state.begin_submit();
    state.set_field(Field::Name, "A".into());
    state.set_field(Field::Email, "a@b.com".into());
    state.set_field(Field::Message, "hi".into());
    assert!(state.begin_submit().is_some());
    assert!(state.errors.is_empty());
}

#[test]
fn success_then_reset_clears_everything() {
    let mut state = ContactFormState::default();
    for (field, value) in [
        (Field::Name, "A"),
        (Field::Email, "a@b.com"),
        (Field::Subject, "Pentest"),
        (Field::Message, "hi"),
    ] {
        state.set_field(field, value.into());
    }
    state.begin_submit();
    state.finish_submit(Ok(()));
    assert!(state.submitted);
    assert!(!state.loading);

    state.reset();
    assert_eq!(state.fields, ContactFields::default());
    assert!(!state.submitted);
    assert!(state.errors.is_empty());
}

#[test]
fn failed_send_keeps_fields_and_records_error() {
    let mut state = ContactFormState::default();
    state.set_field(Field::Name, "A".into());
    state.set_field(Field::Email, "a@b.com".into());
    state.set_field(Field::Message, "hi".into());
    state.begin_submit();
    state.finish_submit(Err("offline".into()));

    assert!(!state.submitted);
    assert!(!state.loading);
    assert_eq!(state.send_error.as_deref(), Some("offline"));
    assert_eq!(state.fields.name, "A");

    assert!(state.begin_submit().is_some());
    assert_eq!(state.send_error, None);
}
