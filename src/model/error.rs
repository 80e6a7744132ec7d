//! Error types for the folio application.
//!
//! Errors follow a small hierarchy built with `thiserror`, composing via `?`
//! and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for startup and the terminal shell
//!   - [`ConfigError`] - Config file read/parse failures
//!   - [`ContentError`] - Content file read/parse failures
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Recovery Strategy
//!
//! Startup errors are fatal. Once the page is running nothing is: field
//! validation errors live on the form, remote submission errors become the
//! form's error banner, and clipboard/share failures are logged and shown
//! as a transient status message.

use crate::config::loader::ConfigError;
use crate::logging::LoggingError;
use crate::model::content::ContentError;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file exists but could not be used.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Content file exists but could not be used.
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Without a working terminal the page cannot be shown. The terminal is
    /// restored before the error reaches `main`.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
