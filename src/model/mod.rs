//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod content;
pub mod error;
pub mod key_action;
pub mod section;

// Re-export for convenience
pub use content::{
    load_content, load_content_or_default, ContactInfo, ContactKind, ContentError, Experience,
    Hero, Portfolio, Project,
};
pub use error::AppError;
pub use key_action::KeyAction;
pub use section::{Section, SectionError, SectionId, SectionRegistry};
