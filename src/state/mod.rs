//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod contact_handler;
pub mod form_handler;
pub mod scroll_handler;

// Re-export for convenience
pub use app_state::{AppState, Focus, FormFocus, StatusMessage};
pub use contact_handler::handle_contact_action;
pub use form_handler::{begin_form_editing, focus_first_invalid, handle_form_key};
pub use scroll_handler::handle_scroll_action;
