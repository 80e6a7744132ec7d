//! Contact footer actions: select, copy and open contact values.

use crate::capability::{contact_link, Capabilities};
use crate::model::KeyAction;
use crate::state::AppState;
use std::time::Instant;
use tracing::{info, warn};

/// Shown after a contact value was copied.
pub const COPIED_STATUS: &str = "Copied to clipboard";
/// Shown when the clipboard write failed.
pub const COPY_FAILED_STATUS: &str = "Could not copy to clipboard";
/// Shown when no opener could be launched.
pub const OPEN_FAILED_STATUS: &str = "Could not open link";

/// Handle a contact footer action. Other actions are ignored.
///
/// Capability failures are logged and surfaced as a transient status; they
/// never touch page or form state.
pub fn handle_contact_action(
    state: &mut AppState,
    action: KeyAction,
    caps: &mut dyn Capabilities,
    now: Instant,
) {
    let items = state.portfolio().contact.items();
    let count = items.len();
    let selected = state.selected_contact % count;
    let (kind, value) = items[selected];
    let value = value.to_string();

    match action {
        KeyAction::NextContact => {
            state.selected_contact = (selected + 1) % count;
        }
        KeyAction::PrevContact => {
            state.selected_contact = (selected + count - 1) % count;
        }
        KeyAction::CopyContact => match caps.copy_text(&value) {
            Ok(()) => {
                info!(kind = kind.label(), "contact copied");
                state.set_status(COPIED_STATUS, now);
            }
            Err(e) => {
                warn!(error = %e, "clipboard write failed");
                state.set_status(COPY_FAILED_STATUS, now);
            }
        },
        KeyAction::ShareContact => {
            let opened = contact_link(kind, &value).and_then(|link| caps.open_link(&link));
            match opened {
                Ok(()) => {
                    state.set_status(format!("Opening {}", kind.label()), now);
                }
                Err(e) => {
                    warn!(error = %e, "opening contact link failed");
                    state.set_status(OPEN_FAILED_STATUS, now);
                }
            }
        }
        _ => {}
    }
}
