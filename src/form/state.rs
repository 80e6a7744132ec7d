//! Contact form state machine.
//!
//! Pure state transitions; the only suspension point is [`ContactForm::submit`],
//! which awaits a [`SubmitTransport`]. The TUI drives the same transitions via
//! `begin_submit`/`complete_submit` from a worker thread instead.

use super::transport::{SubmitResponse, SubmitTransport, TransportError};
use super::validation::{trimmed_len, validate_field, Field};
use tracing::{debug, info, warn};

/// Banner while a request is in flight.
pub const SENDING_BANNER: &str = "Sending your message...";
/// Banner after the endpoint accepted the message.
pub const SUCCESS_BANNER: &str = "Message sent successfully! I'll get back to you soon.";
/// Banner when the endpoint rejected without a message.
pub const REJECTED_BANNER: &str = "Something went wrong. Please try again.";
/// Banner when the endpoint could not be reached.
pub const NETWORK_BANNER: &str = "Network error. Please check your connection and try again.";

/// One value of type `T` per form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerField<T> {
    /// Name field slot.
    pub name: T,
    /// Email field slot.
    pub email: T,
    /// Message field slot.
    pub message: T,
}

impl<T> PerField<T> {
    /// Slot for `field`.
    pub fn get(&self, field: Field) -> &T {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Mutable slot for `field`.
    pub fn get_mut(&mut self, field: Field) -> &mut T {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }
}

/// Submission lifecycle.
///
/// `Idle → Sending` on a submit that passes validation; `Sending` is left
/// only by an outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Nothing sent yet, or editing after an outcome.
    #[default]
    Idle,
    /// Request in flight.
    Sending,
    /// Endpoint accepted the message.
    Success,
    /// Endpoint rejected the message or was unreachable.
    Error,
}

/// Payload handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Sender name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl Submission {
    /// Value sent for `field`.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

/// Contact form values, per-field errors, touched flags and submit status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: PerField<String>,
    errors: PerField<String>,
    touched: PerField<bool>,
    status: SubmitStatus,
    banner: String,
}

impl ContactForm {
    /// Empty, untouched and idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a field.
    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// Recorded error for `field`; empty when none.
    pub fn error(&self, field: Field) -> &str {
        self.errors.get(field)
    }

    /// Whether the field has lost focus at least once.
    pub fn is_touched(&self, field: Field) -> bool {
        *self.touched.get(field)
    }

    /// Current submit status.
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Result banner; empty when nothing to show.
    pub fn banner(&self) -> &str {
        &self.banner
    }

    /// Store a new value for `field`.
    ///
    /// Any recorded error is cleared immediately; a touched field is then
    /// re-validated so the error reflects the new value.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.errors.get_mut(field).clear();
        if self.is_touched(field) {
            *self.errors.get_mut(field) = validate_field(field, &value);
        }
        *self.values.get_mut(field) = value;
    }

    /// Field lost focus: mark it touched and validate.
    pub fn on_field_blur(&mut self, field: Field) {
        *self.touched.get_mut(field) = true;
        *self.errors.get_mut(field) = validate_field(field, self.value(field));
    }

    /// All three rules pass on the current values. Does not record errors.
    pub fn is_form_valid(&self) -> bool {
        Field::ALL
            .iter()
            .all(|&field| validate_field(field, self.value(field)).is_empty())
    }

    /// Whether the submit control accepts input.
    pub fn can_submit(&self) -> bool {
        self.status != SubmitStatus::Sending && self.is_form_valid()
    }

    /// Trimmed character count of the message, for the live counter.
    pub fn message_length(&self) -> usize {
        trimmed_len(self.value(Field::Message))
    }

    /// First half of a submit.
    ///
    /// Returns `None` while a submit is in flight, or when full validation
    /// fails (every field is marked touched and its error recorded). On
    /// success the form enters `Sending` and the payload to send is returned.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.status == SubmitStatus::Sending {
            debug!("submit ignored while sending");
            return None;
        }

        let mut valid = true;
        for field in Field::ALL {
            *self.touched.get_mut(field) = true;
            let error = validate_field(field, self.value(field));
            valid &= error.is_empty();
            *self.errors.get_mut(field) = error;
        }
        if !valid {
            debug!("submit blocked by validation errors");
            return None;
        }

        self.status = SubmitStatus::Sending;
        self.banner = SENDING_BANNER.to_string();
        info!("submitting contact form");
        Some(Submission {
            name: self.values.name.clone(),
            email: self.values.email.clone(),
            message: self.values.message.clone(),
        })
    }

    /// Second half of a submit: apply the transport outcome.
    ///
    /// Ignored unless the form is `Sending`. Returns true if applied.
    pub fn complete_submit(&mut self, outcome: Result<SubmitResponse, TransportError>) -> bool {
        if self.status != SubmitStatus::Sending {
            debug!("stale submit outcome discarded");
            return false;
        }

        match outcome {
            Ok(response) if response.success => {
                info!("contact form sent");
                self.values = PerField::default();
                self.errors = PerField::default();
                self.touched = PerField::default();
                self.status = SubmitStatus::Success;
                self.banner = SUCCESS_BANNER.to_string();
            }
            Ok(response) => {
                warn!(message = ?response.message, "contact form rejected");
                self.status = SubmitStatus::Error;
                self.banner = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| REJECTED_BANNER.to_string());
            }
            Err(error) => {
                warn!(%error, "contact form submit failed");
                self.status = SubmitStatus::Error;
                self.banner = NETWORK_BANNER.to_string();
            }
        }
        true
    }

    /// Validate, send once through `transport`, and apply the outcome.
    ///
    /// Returns false without calling the transport if the submit was
    /// rejected locally.
    pub async fn submit(&mut self, transport: &dyn SubmitTransport) -> bool {
        let Some(submission) = self.begin_submit() else {
            return false;
        };
        let outcome = transport.submit(&submission).await;
        self.complete_submit(outcome)
    }

    /// Back to the initial empty state.
    pub fn reset_form(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
