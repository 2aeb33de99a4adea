//! Contact form validation and (simulated) submission.
//!
//! Submission never leaves the page: the form shows a loading state for
//! [`SUBMIT_DELAY`], then thanks the visitor and resets.

use std::collections::HashMap;
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use thiserror::Error;

/// How long the simulated submission takes.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(2000);

/// Message shown once the submission completes.
pub const THANK_YOU: &str = "Thank you for your message! I'll get back to you soon.";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid Email Regex"))
}

// =============================================================================
// Fields
// =============================================================================

/// Contact form inputs, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The input's `name` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Capitalized name for messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    /// Id of the element that displays this field's error.
    pub fn error_element_id(&self) -> String {
        format!("{}Error", self.name())
    }
}

/// Why a field value was rejected. The display text is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Required(Field),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Name must be at least 2 characters long")]
    NameTooShort,

    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

/// Length as the page measures it: UTF-16 code units, so a character
/// outside the Basic Multilingual Plane counts twice.
fn text_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Validate a single field value. Surrounding whitespace is ignored.
pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Required(field));
    }

    match field {
        Field::Email if !email_regex().is_match(value) => Err(FieldError::InvalidEmail),
        Field::Name if text_length(value) < 2 => Err(FieldError::NameTooShort),
        Field::Message if text_length(value) < 10 => Err(FieldError::MessageTooShort),
        _ => Ok(()),
    }
}

// =============================================================================
// Form
// =============================================================================

/// Submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    /// Loading state; the submit button is disabled.
    Submitting,
    /// Submission finished and the form was reset.
    Sent,
}

/// Values, errors and status of the contact form.
#[derive(Debug, Default)]
pub struct ContactForm {
    values: HashMap<Field, String>,
    errors: HashMap<Field, FieldError>,
    status: FormStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Text for the field's error element; empty when valid.
    pub fn error_message(&self, field: Field) -> String {
        self.error(field).map(ToString::to_string).unwrap_or_default()
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// The user typed into a field.
    ///
    /// A field is only re-validated while typing once it is already in
    /// error, so the user is not nagged before leaving the field.
    pub fn on_input(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
        if self.status == FormStatus::Sent {
            self.status = FormStatus::Editing;
        }
        if self.errors.contains_key(&field) {
            self.validate(field);
        }
    }

    /// The field lost focus.
    pub fn on_blur(&mut self, field: Field) -> bool {
        self.validate(field)
    }

    fn validate(&mut self, field: Field) -> bool {
        match validate_field(field, self.value(field)) {
            Ok(()) => {
                self.errors.remove(&field);
                true
            }
            Err(e) => {
                self.errors.insert(field, e);
                false
            }
        }
    }

    /// The form was submitted.
    ///
    /// Every field is validated (not just the first failing one). On
    /// success the form enters `Submitting`; the caller finishes the
    /// submission after [`SUBMIT_DELAY`]. A submit while already
    /// submitting is ignored.
    pub fn submit(&mut self) -> Result<(), Vec<FieldError>> {
        if self.status == FormStatus::Submitting {
            return Ok(());
        }

        let mut failures = Vec::new();
        for field in Field::ALL {
            if !self.validate(field) {
                if let Some(error) = self.errors.get(&field) {
                    failures.push(error.clone());
                }
            }
        }

        if failures.is_empty() {
            tracing::info!("Contact form submitted");
            self.status = FormStatus::Submitting;
            Ok(())
        } else {
            tracing::debug!("Contact form rejected with {} error(s)", failures.len());
            Err(failures)
        }
    }

    /// The simulated submission finished: reset the form.
    pub fn finish_submission(&mut self) -> Option<&'static str> {
        if self.status != FormStatus::Submitting {
            return None;
        }
        self.values.clear();
        self.errors.clear();
        self.status = FormStatus::Sent;
        Some(THANK_YOU)
    }
}
