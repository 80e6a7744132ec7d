//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Page scrolling
    /// Scroll the page up by one row. Default: k/↑
    ScrollUp,
    /// Scroll the page down by one row. Default: j/↓
    ScrollDown,
    /// Scroll up by one viewport height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one viewport height. Default: Ctrl+d/Page Down
    PageDown,
    /// Scroll to the end of the page. Default: G/End
    ScrollToBottom,
    /// Scroll back to the hero banner. Default: g/t/Home
    ScrollToTop,

    // Section navigation
    /// Jump to the section after the active one. Default: Tab/n
    NextSection,
    /// Jump to the section before the active one. Default: Shift+Tab/p
    PrevSection,
    /// Jump to a section by its 1-based position. Default: 1-9
    JumpToSection(usize),

    // Contact form
    /// Start editing the contact form. Default: i
    EditForm,

    // Contact footer
    /// Copy the selected contact value to the clipboard. Default: c/y
    CopyContact,
    /// Share the selected contact value. Default: s
    ShareContact,
    /// Select the next contact value. Default: ]
    NextContact,
    /// Select the previous contact value. Default: [
    PrevContact,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
}
