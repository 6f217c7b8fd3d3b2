//! Contact form state and validation.
//!
//! DESIGN
//! ======
//! `validate` is a pure function over [`ContactFields`] so the server can
//! run the exact same rules on the JSON it receives. The form state wraps it
//! with the submit lifecycle: `begin_submit` hands out a payload at most once
//! per attempt, `finish_submit` closes the attempt.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Valid email required";
pub const MESSAGE_REQUIRED: &str = "Message is required";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

// A pattern that fails to compile rejects every address.
static EMAIL_SHAPE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN));

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// Id of the form control, referenced by its `<label for>`.
    #[must_use]
    pub fn dom_id(self) -> String {
        format!("contact-{}", self.as_str())
    }

    /// Id of the inline error, referenced by `aria-describedby`.
    #[must_use]
    pub fn error_id(self) -> String {
        format!("{}-error", self.as_str())
    }
}

/// The submitted payload. Also the JSON body of `POST /api/contact`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactFields {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }
}

pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Whitespace anywhere, padding included, fails the shape check. Callers that
/// want to accept padded input trim before validating.
fn is_email(value: &str) -> bool {
    if value.trim().is_empty() {
        return false;
    }
    EMAIL_SHAPE.as_ref().is_ok_and(|re| re.is_match(value))
}

/// Check the required fields. An empty map means the payload is sendable.
#[must_use]
pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if fields.name.trim().is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }
    if !is_email(&fields.email) {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    }
    if fields.message.trim().is_empty() {
        errors.insert(Field::Message, MESSAGE_REQUIRED);
    }
    errors
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub fields: ContactFields,
    pub errors: FieldErrors,
    pub submitted: bool,
    pub loading: bool,
    pub send_error: Option<String>,
}

impl ContactFormState {
    pub fn set_field(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
    }

    #[must_use]
    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Validate and, if clean, enter the loading state.
    ///
    /// Returns the payload to send, or `None` when validation failed or an
    /// attempt is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactFields> {
        if self.loading {
            return None;
        }
        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            return None;
        }
        self.send_error = None;
        self.loading = true;
        Some(self.fields.clone())
    }

    pub fn finish_submit(&mut self, result: Result<(), String>) {
        self.loading = false;
        match result {
            Ok(()) => self.submitted = true,
            Err(msg) => self.send_error = Some(msg),
        }
    }

    /// Back to an empty form after a successful send.
    pub fn reset(&mut self) {
        self.fields = ContactFields::default();
        self.errors.clear();
        self.submitted = false;
        self.send_error = None;
    }
}
