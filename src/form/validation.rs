//! Field validation rules (pure).
//!
//! Each rule maps a field value to an error message, or an empty string when
//! the value is valid.

use std::fmt;

/// Minimum trimmed length of the name field.
pub const NAME_MIN_CHARS: usize = 2;
/// Minimum trimmed length of the message field.
pub const MESSAGE_MIN_CHARS: usize = 10;
/// Maximum trimmed length of the message field.
pub const MESSAGE_MAX_CHARS: usize = 1000;

/// The three contact form fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Sender name.
    Name,
    /// Reply address.
    Email,
    /// Message body.
    Message,
}

impl Field {
    /// Fields in tab order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Key used in the submitted form body.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    /// Next field in tab order, `None` after the last.
    pub fn next(self) -> Option<Field> {
        match self {
            Field::Name => Some(Field::Email),
            Field::Email => Some(Field::Message),
            Field::Message => None,
        }
    }

    /// Previous field in tab order, `None` before the first.
    pub fn prev(self) -> Option<Field> {
        match self {
            Field::Name => None,
            Field::Email => Some(Field::Name),
            Field::Message => Some(Field::Email),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Name: required, at least two characters, letters and whitespace only.
pub fn validate_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return "Name is required".to_string();
    }
    if trimmed.chars().count() < NAME_MIN_CHARS {
        return "Name must be at least 2 characters".to_string();
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        return "Name can only contain letters and spaces".to_string();
    }
    String::new()
}

/// Email: required and shaped like `local@domain.tld`.
pub fn validate_email(email: &str) -> String {
    if email.trim().is_empty() {
        return "Email is required".to_string();
    }
    if !is_email_shaped(email) {
        return "Please enter a valid email address".to_string();
    }
    String::new()
}

/// Message: required, 10 to 1000 characters after trimming.
pub fn validate_message(message: &str) -> String {
    let length = trimmed_len(message);
    if length == 0 {
        return "Message is required".to_string();
    }
    if length < MESSAGE_MIN_CHARS {
        return "Message must be at least 10 characters".to_string();
    }
    if length > MESSAGE_MAX_CHARS {
        return "Message cannot exceed 1000 characters".to_string();
    }
    String::new()
}

/// Dispatch to the rule for `field`.
pub fn validate_field(field: Field, value: &str) -> String {
    match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Message => validate_message(value),
    }
}

/// Character count after trimming, as shown by the message counter.
pub fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

/// One run of non-whitespace, non-`@` characters, an `@`, then a domain made
/// of two such runs joined by a `.`.
fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Some '.' with at least one character on either side
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
