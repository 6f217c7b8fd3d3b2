use std::sync::Mutex;

use astrax_client::state::contact::Field;

use super::*;

// =========================================================================
// Test sinks
// =========================================================================

#[derive(Default)]
struct RecordingSink {
    delivered: Mutex<Vec<ContactFields>>,
}

#[async_trait::async_trait]
impl ContactSink for RecordingSink {
    async fn deliver(&self, message: &ContactFields) -> Result<(), ContactError> {
        self.delivered.lock().unwrap().push(message.clone());
        Ok(())
    }
}

struct FailingSink;

#[async_trait::async_trait]
impl ContactSink for FailingSink {
    async fn deliver(&self, _message: &ContactFields) -> Result<(), ContactError> {
        Err(ContactError::Delivery("smtp down".into()))
    }
}

fn valid() -> ContactFields {
    ContactFields {
        name: "  Ada  ".into(),
        email: "ada@example.com ".into(),
        subject: "Audit".into(),
        message: "Please call.".into(),
    }
}

// =========================================================================
// submit
// =========================================================================

#[tokio::test]
async fn valid_submission_reaches_sink_trimmed() {
    let sink = RecordingSink::default();
    submit(&sink, valid()).await.unwrap();

    let delivered = sink.delivered.lock().unwrap();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].name, "Ada");
    assert_eq!(delivered[0].email, "ada@example.com");
}

#[tokio::test]
async fn invalid_submission_never_reaches_sink() {
    let sink = RecordingSink::default();
    let err = submit(&sink, ContactFields::default()).await.unwrap_err();

    let ContactError::Invalid(errors) = err else {
        panic!("expected validation error");
    };
    assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![Field::Name, Field::Email, Field::Message]);
    assert!(sink.delivered.lock().unwrap().is_empty());
}

#[tokio::test]
async fn sink_failure_is_propagated() {
    let err = submit(&FailingSink, valid()).await.unwrap_err();
    assert!(matches!(err, ContactError::Delivery(ref msg) if msg == "smtp down"));
}

#[tokio::test]
async fn log_sink_accepts_everything_valid() {
    assert!(submit(&LogSink, valid()).await.is_ok());
}

#[test]
fn invalid_error_message_counts_fields() {
    let mut errors = FieldErrors::new();
    errors.insert(Field::Email, "Valid email required");
    assert_eq!(ContactError::Invalid(errors).to_string(), "invalid submission: 1 field error(s)");
}

// =========================================================================
// redact_email
// =========================================================================

#[test]
fn redacted_email_keeps_only_domain() {
    assert_eq!(redact_email("ada@example.com"), "***@example.com");
    assert_eq!(redact_email("a@b@c.io"), "***@c.io");
}

#[test]
fn redacted_email_masks_malformed_input() {
    assert_eq!(redact_email("no-at-sign"), "***");
    assert_eq!(redact_email("trailing@"), "***");
    assert_eq!(redact_email(""), "***");
}
