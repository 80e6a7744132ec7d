//! Contact form keyboard handler.
//!
//! While the form has focus, keys edit the focused field directly instead of
//! going through [`KeyBindings`](crate::config::KeyBindings). Leaving a field
//! in any direction counts as a blur and validates it.

use crate::form::Field;
use crate::model::SectionId;
use crate::state::{AppState, Focus, FormFocus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;
use tracing::{debug, warn};

/// Section that hosts the contact form.
pub const FORM_SECTION: &str = "form";

/// Give the form keyboard focus and bring its section into view.
pub fn begin_form_editing(state: &mut AppState, now: Instant) {
    state.focus = Focus::Form(FormFocus::FIRST);
    match SectionId::new(FORM_SECTION) {
        Ok(id) => {
            if let Err(e) = state.navigate_to(&id, now) {
                warn!(error = %e, "form section is not registered");
            }
        }
        Err(e) => warn!(error = %e, "invalid form section id"),
    }
}

/// Handle a key while the form has focus.
///
/// Returns true when the user asked to submit; the caller owns the submit
/// worker and dispatches the request.
pub fn handle_form_key(state: &mut AppState, key: KeyEvent) -> bool {
    let Focus::Form(focus) = state.focus else {
        return false;
    };
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('s') if ctrl => return true,
        KeyCode::Esc => {
            leave(state, focus);
            state.focus = Focus::Page;
        }
        KeyCode::Tab | KeyCode::Down => move_focus(state, focus, focus.next()),
        KeyCode::BackTab | KeyCode::Up => move_focus(state, focus, focus.prev()),
        KeyCode::Enter => match focus {
            FormFocus::Field(Field::Message) => push_char(state, Field::Message, '\n'),
            FormFocus::Field(_) => move_focus(state, focus, focus.next()),
            FormFocus::Submit => return true,
        },
        KeyCode::Char(' ') if focus == FormFocus::Submit => return true,
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            if let Some(field) = focus.field() {
                push_char(state, field, c);
            }
        }
        KeyCode::Backspace => {
            if let Some(field) = focus.field() {
                let mut value = state.form.value(field).to_string();
                value.pop();
                state.form.on_field_change(field, value);
            }
        }
        _ => {}
    }
    false
}

/// After a blocked submit, move focus to the first field showing an error.
pub fn focus_first_invalid(state: &mut AppState) {
    if let Some(field) = Field::ALL
        .into_iter()
        .find(|&field| !state.form.error(field).is_empty())
    {
        debug!(%field, "focusing first invalid field");
        state.focus = Focus::Form(FormFocus::Field(field));
    }
}

fn push_char(state: &mut AppState, field: Field, c: char) {
    let mut value = state.form.value(field).to_string();
    value.push(c);
    state.form.on_field_change(field, value);
}

fn move_focus(state: &mut AppState, from: FormFocus, to: FormFocus) {
    leave(state, from);
    state.focus = Focus::Form(to);
}

fn leave(state: &mut AppState, focus: FormFocus) {
    if let Some(field) = focus.field() {
        state.form.on_field_blur(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::SubmitStatus;
    use crate::model::{Portfolio, SectionRegistry};
    use crate::tracker::{SectionExtent, TrackerConfig};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn editing() -> AppState {
        let mut state = AppState::new(
            Portfolio::default(),
            SectionRegistry::portfolio(),
            TrackerConfig::for_rows(),
        );
        state.focus = Focus::Form(FormFocus::FIRST);
        state
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_form_key(state, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_edits_focused_field() {
        let mut state = editing();
        type_text(&mut state, "Ada");
        handle_form_key(&mut state, key(KeyCode::Backspace));

        assert_eq!(state.form.value(Field::Name), "Ad");
        assert!(!state.form.is_touched(Field::Name));
    }

    #[test]
    fn shifted_characters_are_typed() {
        let mut state = editing();
        handle_form_key(&mut state, KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
        assert_eq!(state.form.value(Field::Name), "A");
    }

    #[test]
    fn tab_blurs_and_validates_previous_field() {
        let mut state = editing();
        type_text(&mut state, "A");
        handle_form_key(&mut state, key(KeyCode::Tab));

        assert_eq!(state.focus, Focus::Form(FormFocus::Field(Field::Email)));
        assert!(state.form.is_touched(Field::Name));
        assert!(!state.form.error(Field::Name).is_empty());
    }

    #[test]
    fn enter_in_message_inserts_newline() {
        let mut state = editing();
        state.focus = Focus::Form(FormFocus::Field(Field::Message));
        type_text(&mut state, "hi");
        handle_form_key(&mut state, key(KeyCode::Enter));
        type_text(&mut state, "there");

        assert_eq!(state.form.value(Field::Message), "hi\nthere");
    }

    #[test]
    fn enter_in_single_line_field_moves_on() {
        let mut state = editing();
        assert!(!handle_form_key(&mut state, key(KeyCode::Enter)));
        assert_eq!(state.focus, Focus::Form(FormFocus::Field(Field::Email)));
    }

    #[test]
    fn submit_requests() {
        let mut state = editing();
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(handle_form_key(&mut state, ctrl_s));
        assert_eq!(state.form.value(Field::Name), "", "ctrl+s must not type");

        state.focus = Focus::Form(FormFocus::Submit);
        assert!(handle_form_key(&mut state, key(KeyCode::Enter)));
        assert!(handle_form_key(&mut state, key(KeyCode::Char(' '))));
    }

    #[test]
    fn escape_returns_focus_to_page() {
        let mut state = editing();
        handle_form_key(&mut state, key(KeyCode::Esc));

        assert_eq!(state.focus, Focus::Page);
        assert!(state.form.is_touched(Field::Name));
    }

    #[test]
    fn keys_are_ignored_without_form_focus() {
        let mut state = editing();
        state.focus = Focus::Page;
        assert!(!handle_form_key(&mut state, key(KeyCode::Char('x'))));
        assert_eq!(state.form.value(Field::Name), "");
    }

    #[test]
    fn blocked_submit_focuses_first_error() {
        let mut state = editing();
        state.form.on_field_change(Field::Name, "Ada Lovelace");
        state.form.on_field_change(Field::Email, "not-an-email");
        state.focus = Focus::Form(FormFocus::Submit);

        assert!(state.form.begin_submit().is_none());
        focus_first_invalid(&mut state);

        assert_eq!(state.focus, Focus::Form(FormFocus::Field(Field::Email)));
        assert_eq!(state.form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn begin_editing_navigates_to_form_section() {
        let t0 = Instant::now();
        let mut state = AppState::new(
            Portfolio::default(),
            SectionRegistry::portfolio(),
            TrackerConfig::for_rows(),
        );
        let extents: Vec<_> = SectionRegistry::portfolio()
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id().clone(), SectionExtent::new(i as f64 * 20.0, 20.0)))
            .collect();
        state.set_layout(20, 120, extents, t0);

        begin_form_editing(&mut state, t0);

        assert_eq!(state.focus, Focus::Form(FormFocus::FIRST));
        assert_eq!(state.active_section().as_str(), FORM_SECTION);
        assert!(state.is_animating());
    }
}
