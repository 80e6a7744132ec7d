//! Contact form: validation rules, submit state machine and transport.

pub mod state;
pub mod transport;
pub mod validation;
pub mod worker;

pub use state::{ContactForm, PerField, Submission, SubmitStatus};
pub use transport::{
    FormEndpoint, SubmitResponse, SubmitTransport, TransportError, Web3FormsTransport,
};
pub use validation::{
    trimmed_len, validate_email, validate_field, validate_message, validate_name, Field,
    MESSAGE_MAX_CHARS, MESSAGE_MIN_CHARS,
};
pub use worker::SubmitWorker;
