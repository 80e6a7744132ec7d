//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings. Only consulted while the page has
/// focus; the contact form consumes raw keys while editing.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };

        // Vim-style scrolling
        bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::ScrollDown);
        bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::ScrollUp);
        bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::ScrollToTop);
        bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::ScrollToBottom);
        bind(KeyCode::Char('t'), KeyModifiers::NONE, KeyAction::ScrollToTop);
        bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::ScrollToTop);
        bind(KeyCode::End, KeyModifiers::NONE, KeyAction::ScrollToBottom);

        // Arrow key scrolling
        bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::ScrollUp);
        bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::ScrollDown);

        // Page navigation
        bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown);
        bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp);
        bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::PageDown);
        bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PageUp);
        bind(KeyCode::Char(' '), KeyModifiers::NONE, KeyAction::PageDown);

        // Section navigation
        bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::NextSection);
        bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevSection);
        bind(KeyCode::Char('n'), KeyModifiers::NONE, KeyAction::NextSection);
        bind(KeyCode::Char('p'), KeyModifiers::NONE, KeyAction::PrevSection);
        for (index, digit) in ('1'..='9').enumerate() {
            bind(
                KeyCode::Char(digit),
                KeyModifiers::NONE,
                KeyAction::JumpToSection(index + 1),
            );
        }

        // Contact form
        bind(KeyCode::Char('i'), KeyModifiers::NONE, KeyAction::EditForm);
        bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::EditForm);

        // Contact footer
        bind(KeyCode::Char('c'), KeyModifiers::NONE, KeyAction::CopyContact);
        bind(KeyCode::Char('y'), KeyModifiers::NONE, KeyAction::CopyContact);
        bind(KeyCode::Char('s'), KeyModifiers::NONE, KeyAction::ShareContact);
        bind(KeyCode::Char(']'), KeyModifiers::NONE, KeyAction::NextContact);
        bind(KeyCode::Char('['), KeyModifiers::NONE, KeyAction::PrevContact);

        // Application controls
        bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);
        bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);

        Self { bindings }
    }
}
