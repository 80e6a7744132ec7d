//! Navigable page sections.
//!
//! The set of sections is fixed at startup. Identifiers are unique and the
//! registry order is the top-to-bottom visual order of the page.

use std::fmt;
use thiserror::Error;

/// Errors raised while building a section registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SectionError {
    /// Section identifier was empty or whitespace.
    #[error("Section identifier cannot be empty")]
    EmptyId,

    /// The same identifier was registered twice.
    #[error("Duplicate section identifier: {0}")]
    DuplicateId(String),

    /// A page needs at least one section.
    #[error("Section registry cannot be empty")]
    NoSections,
}

/// Unique identifier of a page section (e.g. `"hero"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(String);

impl SectionId {
    /// Create a section identifier.
    ///
    /// # Errors
    ///
    /// Returns `SectionError::EmptyId` for empty or whitespace-only input.
    pub fn new(id: impl Into<String>) -> Result<Self, SectionError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(SectionError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One navigable region of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    id: SectionId,
    label: String,
}

impl Section {
    /// Create a section with an identifier and display label.
    pub fn new(id: SectionId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    /// Navigation label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Ordered, validated set of page sections.
///
/// Guaranteed non-empty with unique identifiers, so "the first section" and
/// "the last section" always exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// Build a registry from sections in top-to-bottom order.
    ///
    /// # Errors
    ///
    /// - `SectionError::NoSections` if `sections` is empty
    /// - `SectionError::DuplicateId` if an identifier repeats
    pub fn new(sections: Vec<Section>) -> Result<Self, SectionError> {
        if sections.is_empty() {
            return Err(SectionError::NoSections);
        }
        for (i, section) in sections.iter().enumerate() {
            if sections[..i].iter().any(|s| s.id == section.id) {
                return Err(SectionError::DuplicateId(section.id.to_string()));
            }
        }
        Ok(Self { sections })
    }

    /// The page layout of the portfolio: hero through contact footer.
    pub fn portfolio() -> Self {
        let sections = [
            ("hero", "Hero"),
            ("technologies", "Technologies"),
            ("projects", "Projects"),
            ("experience", "Experience"),
            ("form", "Contact Me"),
            ("contact", "Get in Touch"),
        ]
        .into_iter()
        .map(|(id, label)| Section::new(SectionId(id.to_string()), label))
        .collect();

        Self { sections }
    }

    /// Sections in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Topmost section, the fallback verdict.
    pub fn first(&self) -> &Section {
        &self.sections[0]
    }

    /// Bottommost section, chosen near the end of the page.
    pub fn last(&self) -> &Section {
        &self.sections[self.sections.len() - 1]
    }

    /// Section at a navigation index.
    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Position of a section in top-to-bottom order.
    pub fn index_of(&self, id: &SectionId) -> Option<usize> {
        self.sections.iter().position(|s| &s.id == id)
    }

    /// Whether `id` names a registered section.
    pub fn contains(&self, id: &SectionId) -> bool {
        self.index_of(id).is_some()
    }

    /// Look up a section by identifier text.
    pub fn find(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id.as_str() == id)
    }
}
