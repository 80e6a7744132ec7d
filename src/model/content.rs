//! Portfolio page content.
//!
//! Content is plain data loaded from a TOML file. When no file is configured
//! the built-in sample portfolio is used.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a content file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// Failed to read the content file.
    #[error("Failed to read content file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Content file is not valid TOML or does not match the schema.
    #[error("Invalid content in {path}: {reason}")]
    ParseError {
        /// Path with invalid content.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// Everything rendered on the page, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Portfolio {
    /// Technology chips shown under the hero.
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Introductory block.
    pub hero: Hero,
    /// Project cards in display order.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Timeline entries in display order.
    #[serde(default)]
    pub experiences: Vec<Experience>,
    /// Footer contact block.
    pub contact: ContactInfo,
}

/// Introductory block at the top of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hero {
    /// Full name, the page heading.
    pub name: String,
    /// Role shown under the name.
    pub title: String,
    /// One or two sentences under the title.
    pub summary: String,
}

/// One project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Card heading.
    pub title: String,
    /// Card body text.
    pub description: String,
    /// Technology chips for the card.
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Source repository URL.
    #[serde(default)]
    pub link: Option<String>,
    /// Deployed demo URL.
    #[serde(default)]
    pub live_demo: Option<String>,
}

/// One entry of the experience timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Experience {
    /// Year or range shown as the timeline marker.
    pub year: String,
    /// Job title.
    pub role: String,
    /// Employer.
    pub company: String,
    /// What the role involved.
    pub description: String,
    /// Technology chips for the entry.
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// Footer contact block. Each value can be copied or shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactInfo {
    /// Postal address, opened in a maps search.
    pub address: String,
    /// Phone number, opened as a `tel:` link.
    pub phone: String,
    /// Email address, opened as a `mailto:` link.
    pub email: String,
    /// Owner name shown after the copyright year.
    pub copyright: String,
}

/// Kind of a contact value; decides how it is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKind {
    /// Opened as a maps search.
    Address,
    /// Opened as a `tel:` link.
    Phone,
    /// Opened as a `mailto:` link.
    Email,
}

impl ContactKind {
    /// Label shown before the value.
    pub fn label(self) -> &'static str {
        match self {
            ContactKind::Address => "Address",
            ContactKind::Phone => "Phone",
            ContactKind::Email => "Email",
        }
    }
}

impl ContactInfo {
    /// Contact values in display order.
    pub fn items(&self) -> [(ContactKind, &str); 3] {
        [
            (ContactKind::Address, self.address.as_str()),
            (ContactKind::Phone, self.phone.as_str()),
            (ContactKind::Email, self.email.as_str()),
        ]
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            technologies: ["React", "Next.js", "Tailwind", "Node.js", "MySQL", "Docker", "Git"]
                .into_iter()
                .map(String::from)
                .collect(),
            hero: Hero {
                name: "Sam Rivera".to_string(),
                title: "Full Stack Developer".to_string(),
                summary: "Information technology graduate who picks up new tools quickly \
                          and enjoys turning rough ideas into fast, dependable software."
                    .to_string(),
            },
            projects: vec![
                Project {
                    title: "Country Explorer".to_string(),
                    description: "Browse and filter countries with live data from a public REST API."
                        .to_string(),
                    technologies: vec!["React".to_string(), "Axios".to_string()],
                    link: Some("https://github.com/example/country-explorer".to_string()),
                    live_demo: None,
                },
                Project {
                    title: "Image Gallery".to_string(),
                    description: "Searchable photo gallery with infinite scrolling.".to_string(),
                    technologies: vec!["React".to_string(), "Tailwind".to_string()],
                    link: Some("https://github.com/example/image-gallery".to_string()),
                    live_demo: None,
                },
            ],
            experiences: vec![Experience {
                year: "2025".to_string(),
                role: "Intern Software Engineer".to_string(),
                company: "Example Corp.".to_string(),
                description: "Built and maintained web applications, integrated backend \
                              services and tested REST APIs."
                    .to_string(),
                technologies: vec!["React".to_string(), "Firebase".to_string()],
            }],
            contact: ContactInfo {
                address: "42 Harbour Road, Colombo".to_string(),
                phone: "+94 77 000 0000".to_string(),
                email: "hello@example.com".to_string(),
                copyright: "Sam Rivera. All rights reserved.".to_string(),
            },
        }
    }
}

/// Load portfolio content from a TOML file.
///
/// # Errors
///
/// Returns `ContentError` if the file cannot be read or does not match the schema.
pub fn load_content(path: &Path) -> Result<Portfolio, ContentError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ContentError::ReadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    toml::from_str(&contents).map_err(|e| ContentError::ParseError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Load content from `path` when given, otherwise the built-in sample.
pub fn load_content_or_default(path: Option<&Path>) -> Result<Portfolio, ContentError> {
    match path {
        Some(path) => load_content(path),
        None => Ok(Portfolio::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_survives_toml() {
        let original = Portfolio::default();
        let text = toml::to_string(&original).expect("serialize");
        let parsed: Portfolio = toml::from_str(&text).expect("parse");
        assert_eq!(parsed, original);
    }

    #[test]
    fn minimal_content_uses_empty_lists() {
        let text = r#"
            [hero]
            name = "A"
            title = "B"
            summary = "C"

            [contact]
            address = "addr"
            phone = "123"
            email = "a@b.co"
            copyright = "A"
        "#;
        let parsed: Portfolio = toml::from_str(text).unwrap();
        assert!(parsed.technologies.is_empty());
        assert!(parsed.projects.is_empty());
        assert!(parsed.experiences.is_empty());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let text = r#"
            colour = "red"
            [hero]
            name = "A"
            title = "B"
            summary = "C"
            [contact]
            address = "addr"
            phone = "123"
            email = "a@b.co"
            copyright = "A"
        "#;
        assert!(toml::from_str::<Portfolio>(text).is_err());
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = load_content(Path::new("/nonexistent/folio/content.toml")).unwrap_err();
        assert!(matches!(err, ContentError::ReadError { .. }));
    }

    #[test]
    fn no_path_yields_default() {
        assert_eq!(load_content_or_default(None).unwrap(), Portfolio::default());
    }

    #[test]
    fn contact_items_in_display_order() {
        let contact = Portfolio::default().contact;
        let labels: Vec<_> = contact.items().iter().map(|(kind, _)| kind.label()).collect();
        assert_eq!(labels, vec!["Address", "Phone", "Email"]);
    }
}
