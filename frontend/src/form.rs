//! Form state machine shared by the contact and waitlist forms. Keeps the
//! touched/error bookkeeping out of the components so the "no error before
//! first blur" rule is testable without a DOM.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use shared::{
    contact::{self, ContactField},
    waitlist::{self, WaitlistField},
    ContactRequest, FieldError, WaitlistRequest,
};

/// Submission lifecycle of a single form instance.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl FormStatus {
    /// The legal edges: a submission starts from `Idle` or `Error`, ends in
    /// `Success` or `Error`, and only a reset returns to `Idle`.
    #[must_use]
    pub const fn transition(self, next: Self) -> Option<Self> {
        match (self, next) {
            (Self::Idle | Self::Error, Self::Submitting)
            | (Self::Submitting, Self::Success | Self::Error)
            | (_, Self::Idle) => Some(next),
            _ => None,
        }
    }
}

/// A form variant: its fields, validation rules and wire shape.
pub trait FormModel: Clone + Default + PartialEq {
    type Field: Copy + Eq + Hash + Debug + 'static;

    /// Fields in declaration order.
    const FIELDS: &'static [Self::Field];
    /// Endpoint the form posts to.
    const ENDPOINT: &'static str;
    /// Shown when the server rejects a submission without a message.
    const SUBMIT_FALLBACK: &'static str;

    fn value(&self, field: Self::Field) -> &str;
    fn set_value(&mut self, field: Self::Field, value: String);
    fn validate_field(field: Self::Field, value: &str) -> Option<FieldError>;
    fn label(field: Self::Field) -> &'static str;
    fn is_required(field: Self::Field) -> bool;
    /// A copy with surrounding whitespace removed, ready to post.
    fn trimmed(&self) -> Self;
}

impl FormModel for ContactRequest {
    type Field = ContactField;

    const FIELDS: &'static [Self::Field] = &ContactField::ALL;
    const ENDPOINT: &'static str = "/api/contact";
    const SUBMIT_FALLBACK: &'static str = "Failed to send message";

    fn value(&self, field: Self::Field) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn set_value(&mut self, field: Self::Field, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    fn validate_field(field: Self::Field, value: &str) -> Option<FieldError> {
        contact::validate_field(field, value)
    }

    fn label(field: Self::Field) -> &'static str {
        field.label()
    }

    fn is_required(_field: Self::Field) -> bool {
        true
    }

    fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }
}

impl FormModel for WaitlistRequest {
    type Field = WaitlistField;

    const FIELDS: &'static [Self::Field] = &WaitlistField::ALL;
    const ENDPOINT: &'static str = "/api/waitlist";
    const SUBMIT_FALLBACK: &'static str = "Failed to join waitlist";

    fn value(&self, field: Self::Field) -> &str {
        match field {
            WaitlistField::Email => &self.email,
            WaitlistField::Name => self.name.as_deref().unwrap_or(""),
        }
    }

    fn set_value(&mut self, field: Self::Field, value: String) {
        match field {
            WaitlistField::Email => self.email = value,
            WaitlistField::Name => self.name = Some(value),
        }
    }

    fn validate_field(field: Self::Field, value: &str) -> Option<FieldError> {
        waitlist::validate_field(field, value)
    }

    fn label(field: Self::Field) -> &'static str {
        field.label()
    }

    fn is_required(field: Self::Field) -> bool {
        matches!(field, WaitlistField::Email)
    }

    fn trimmed(&self) -> Self {
        // name goes out as an empty string, not omitted
        Self {
            email: self.email.trim().to_owned(),
            name: Some(self.name.as_deref().unwrap_or("").trim().to_owned()),
        }
    }
}

/// Values, sparse error map, touched set and submission status of one form.
#[derive(Debug)]
pub struct FormController<M: FormModel> {
    values: M,
    errors: HashMap<M::Field, String>,
    touched: HashSet<M::Field>,
    status: FormStatus,
    error_message: Option<String>,
}

impl<M: FormModel> Default for FormController<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: FormModel> FormController<M> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: M::default(),
            errors: HashMap::new(),
            touched: HashSet::new(),
            status: FormStatus::default(),
            error_message: None,
        }
    }

    #[must_use]
    pub fn value(&self, field: M::Field) -> &str {
        self.values.value(field)
    }

    #[must_use]
    pub fn error(&self, field: M::Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    #[must_use]
    pub const fn status(&self) -> FormStatus {
        self.status
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    #[must_use]
    pub fn is_touched(&self, field: M::Field) -> bool {
        self.touched.contains(&field)
    }

    fn revalidate(&mut self, field: M::Field) {
        match M::validate_field(field, self.values.value(field)) {
            Some(err) => {
                self.errors.insert(field, err.message(M::label(field)));
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    /// Updates the value. Errors only refresh once the field was touched,
    /// so nothing flashes while the user is still typing a fresh field.
    pub fn handle_change(&mut self, field: M::Field, value: String) {
        self.values.set_value(field, value);

        if self.touched.contains(&field) {
            self.revalidate(field);
        }
    }

    /// Marks the field touched and validates it.
    pub fn handle_blur(&mut self, field: M::Field) {
        self.touched.insert(field);
        self.revalidate(field);
    }

    /// Validates everything and, if clean, moves to `Submitting` and hands
    /// back the trimmed payload to post. Returns `None` while a submission
    /// is already in flight or when validation fails.
    pub fn handle_submit(&mut self) -> Option<M> {
        if self.status == FormStatus::Submitting {
            return None;
        }

        self.errors.clear();
        for &field in M::FIELDS {
            self.touched.insert(field);
            self.revalidate(field);
        }

        if !self.errors.is_empty() {
            // a rejected attempt leaves the form editable again
            if let Some(next) = self.status.transition(FormStatus::Idle) {
                self.status = next;
            }
            return None;
        }

        let next = self.status.transition(FormStatus::Submitting)?;
        self.status = next;
        self.error_message = None;

        Some(self.values.trimmed())
    }

    /// The transport acknowledged the submission.
    pub fn submit_succeeded(&mut self) {
        if let Some(next) = self.status.transition(FormStatus::Success) {
            self.status = next;
            self.values = M::default();
            self.touched.clear();
        }
    }

    /// The transport failed or the server rejected the submission.
    pub fn submit_failed(&mut self, message: String) {
        if let Some(next) = self.status.transition(FormStatus::Error) {
            self.status = next;
            self.error_message = Some(message);
        }
    }

    /// Back to a pristine form, from any state.
    pub fn reset(&mut self) {
        self.values = M::default();
        self.errors.clear();
        self.touched.clear();
        self.status = FormStatus::Idle;
        self.error_message = None;
    }

    /// No current errors and every required field non-empty after trimming.
    /// Derived on every call, never cached.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
            && M::FIELDS
                .iter()
                .all(|&field| !M::is_required(field) || !self.values.value(field).trim().is_empty())
    }
}
