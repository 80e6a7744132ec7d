//! Page scrolling and section navigation keyboard action handler.
//!
//! Plain row scrolling is user-initiated and feeds the tracker's passive
//! path. Section jumps are programmatic: the target section becomes active
//! immediately and the page animates toward it.

use crate::model::KeyAction;
use crate::state::AppState;
use std::time::Instant;
use tracing::warn;

/// Handle a scroll or section-navigation action.
///
/// Non-navigation actions are ignored.
pub fn handle_scroll_action(state: &mut AppState, action: KeyAction, now: Instant) {
    let page = (state.geometry().viewport_height - 1.0).max(1.0);

    match action {
        KeyAction::ScrollUp => state.scroll_by(-1.0, now),
        KeyAction::ScrollDown => state.scroll_by(1.0, now),
        KeyAction::PageUp => state.scroll_by(-page, now),
        KeyAction::PageDown => state.scroll_by(page, now),
        KeyAction::ScrollToBottom => state.scroll_to(state.max_scroll(), now),
        KeyAction::ScrollToTop => state.navigate_to_top(now),
        KeyAction::NextSection => step_section(state, 1, now),
        KeyAction::PrevSection => step_section(state, -1, now),
        KeyAction::JumpToSection(position) => {
            // 1-based; positions past the last section are ignored
            if let Some(index) = position.checked_sub(1) {
                jump_to_index(state, index, now);
            }
        }
        _ => {}
    }
}

/// Move `delta` sections from the active one, clamped to the ends.
fn step_section(state: &mut AppState, delta: isize, now: Instant) {
    let sections = state.tracker.sections();
    let current = sections.index_of(state.active_section()).unwrap_or(0);
    let last = sections.len().saturating_sub(1);
    let index = current.saturating_add_signed(delta).min(last);
    jump_to_index(state, index, now);
}

fn jump_to_index(state: &mut AppState, index: usize, now: Instant) {
    let Some(id) = state.tracker.sections().get(index).map(|s| s.id().clone()) else {
        return;
    };
    if let Err(e) = state.navigate_to(&id, now) {
        warn!(error = %e, "section navigation failed");
    }
}

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;
