//! Contact message intake.
//!
//! DESIGN
//! ======
//! Validation reuses the client's rules so both sides reject the same input.
//! Delivery is behind [`ContactSink`] so tests can record or fail on demand.
//! The bundled [`LogSink`] writes a structured log line and stores nothing.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use astrax_client::state::contact::{ContactFields, FieldErrors, validate};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("invalid submission: {} field error(s)", .0.len())]
    Invalid(FieldErrors),

    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Destination for accepted contact messages.
#[async_trait::async_trait]
pub trait ContactSink: Send + Sync {
    /// Hand off a validated message.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Delivery`] if the message could not be handed off.
    async fn deliver(&self, message: &ContactFields) -> Result<(), ContactError>;
}

pub struct LogSink;

#[async_trait::async_trait]
impl ContactSink for LogSink {
    async fn deliver(&self, message: &ContactFields) -> Result<(), ContactError> {
        info!(
            name_len = message.name.chars().count(),
            email = %redact_email(&message.email),
            subject_len = message.subject.chars().count(),
            message_len = message.message.len(),
            "contact message received"
        );
        Ok(())
    }
}

/// Keep only the domain of an address for logging: `ada@example.com` becomes
/// `***@example.com`. Anything without an `@` is fully masked.
pub(crate) fn redact_email(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((_, domain)) if !domain.is_empty() => format!("***@{domain}"),
        _ => "***".to_owned(),
    }
}

fn normalize(fields: ContactFields) -> ContactFields {
    ContactFields {
        name: fields.name.trim().to_owned(),
        email: fields.email.trim().to_owned(),
        subject: fields.subject.trim().to_owned(),
        message: fields.message.trim().to_owned(),
    }
}

/// Validate a submission and pass it to `sink`.
///
/// # Errors
///
/// Returns [`ContactError::Invalid`] with per-field messages when validation
/// fails, or whatever the sink reports.
pub async fn submit(sink: &dyn ContactSink, fields: ContactFields) -> Result<(), ContactError> {
    let fields = normalize(fields);
    let errors = validate(&fields);
    if !errors.is_empty() {
        return Err(ContactError::Invalid(errors));
    }
    sink.deliver(&fields).await
}
