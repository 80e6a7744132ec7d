//! Host capabilities: clipboard and external links.
//!
//! Failures here never reach the form or page state; callers log them and
//! show a transient status line.

use crate::model::ContactKind;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

const MAPS_SEARCH: &str = "https://maps.google.com/";

/// Errors from clipboard or link operations.
#[derive(Debug, Error)]
pub enum CapabilityError {
    /// Clipboard could not be reached or rejected the write.
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    /// The contact value could not be turned into a link.
    #[error("Failed to build link: {0}")]
    InvalidLink(#[from] url::ParseError),

    /// The platform opener failed to start.
    #[error("Failed to launch {program}: {source}")]
    Launch {
        /// Opener executable name.
        program: &'static str,
        /// Spawn error.
        #[source]
        source: std::io::Error,
    },
}

/// Clipboard and link side effects, injectable for tests.
pub trait Capabilities {
    /// Put `text` on the system clipboard.
    fn copy_text(&mut self, text: &str) -> Result<(), CapabilityError>;

    /// Open `link` with the platform's default handler.
    fn open_link(&mut self, link: &Url) -> Result<(), CapabilityError>;
}

/// Link that opens a contact value: a map search, a dialer or a mail draft.
pub fn contact_link(kind: ContactKind, value: &str) -> Result<Url, CapabilityError> {
    let link = match kind {
        ContactKind::Address => {
            let mut link = Url::parse(MAPS_SEARCH)?;
            link.query_pairs_mut().append_pair("q", value);
            link
        }
        ContactKind::Phone => {
            let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();
            Url::parse(&format!("tel:{digits}"))?
        }
        ContactKind::Email => Url::parse(&format!("mailto:{}", value.trim()))?,
    };
    Ok(link)
}

/// System clipboard via `arboard`, links via the platform opener.
#[derive(Default)]
pub struct SystemCapabilities {
    clipboard: Option<arboard::Clipboard>,
}

impl SystemCapabilities {
    /// Capabilities backed by the system clipboard and opener.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Capabilities for SystemCapabilities {
    fn copy_text(&mut self, text: &str) -> Result<(), CapabilityError> {
        // Opened lazily; headless sessions have no clipboard until asked
        let mut clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()
                .map_err(|e| CapabilityError::Clipboard(e.to_string()))?,
        };
        let result = clipboard
            .set_text(text.to_string())
            .map_err(|e| CapabilityError::Clipboard(e.to_string()));
        self.clipboard = Some(clipboard);
        result
    }

    fn open_link(&mut self, link: &Url) -> Result<(), CapabilityError> {
        let (program, command) = opener(link.as_str());
        launch(program, command).map(|_| ())
    }
}

/// Start `command` detached from the terminal and reap it in the background.
///
/// The returned handle yields the exit status once the child exits.
fn launch(
    program: &'static str,
    mut command: Command,
) -> Result<JoinHandle<Option<ExitStatus>>, CapabilityError> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| CapabilityError::Launch { program, source })?;

    thread::Builder::new()
        .name("folio-opener".to_string())
        .spawn(move || match child.wait() {
            Ok(status) => {
                debug!(program, %status, "opener exited");
                Some(status)
            }
            Err(e) => {
                warn!(program, error = %e, "failed to reap opener");
                None
            }
        })
        .map_err(|source| CapabilityError::Launch { program, source })
}

#[cfg(target_os = "windows")]
fn opener(target: &str) -> (&'static str, Command) {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", target]);
    ("start", command)
}

#[cfg(target_os = "macos")]
fn opener(target: &str) -> (&'static str, Command) {
    let mut command = Command::new("open");
    command.arg(target);
    ("open", command)
}

#[cfg(all(unix, not(target_os = "macos")))]
fn opener(target: &str) -> (&'static str, Command) {
    let mut command = Command::new("xdg-open");
    command.arg(target);
    ("xdg-open", command)
}

/// Records requests instead of performing them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingCapabilities {
    /// Text written to the clipboard, oldest first.
    pub copied: Vec<String>,
    /// Links handed to the opener, oldest first.
    pub opened: Vec<String>,
    /// When set, every operation fails with this clipboard message.
    pub fail_with: Option<String>,
}

impl Capabilities for RecordingCapabilities {
    fn copy_text(&mut self, text: &str) -> Result<(), CapabilityError> {
        if let Some(reason) = &self.fail_with {
            return Err(CapabilityError::Clipboard(reason.clone()));
        }
        self.copied.push(text.to_string());
        Ok(())
    }

    fn open_link(&mut self, link: &Url) -> Result<(), CapabilityError> {
        if let Some(reason) = &self.fail_with {
            return Err(CapabilityError::Clipboard(reason.clone()));
        }
        self.opened.push(link.to_string());
        Ok(())
    }
}
