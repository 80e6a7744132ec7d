//! Page styling configuration.
//!
//! One palette for the whole page; every style collapses to the terminal
//! default when colors are disabled.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== PageStyles =====

/// Styles for every element on the page.
///
/// Modifiers (bold, reversed, dim) survive `--no-color` so focus and
/// selection stay visible on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageStyles {
    /// Section headings.
    pub heading: Style,
    /// Name and highlighted words.
    pub accent: Style,
    /// Body text.
    pub text: Style,
    /// Secondary text such as dates and hints.
    pub muted: Style,
    /// Technology chips.
    pub chip: Style,
    /// Link text.
    pub link: Style,
    /// Field errors and failure banners.
    pub error: Style,
    /// Success banner.
    pub success: Style,
    /// Active entry in the navigation rail.
    pub nav_active: Style,
    /// Navigation entries other than the active one.
    pub nav_inactive: Style,
    /// Focused form control or selected contact value.
    pub focused: Style,
    /// Submit button.
    pub button: Style,
    /// Submit button while a request is in flight.
    pub button_disabled: Style,
    /// Status bar background.
    pub status_bar: Style,
}

impl PageStyles {
    /// Create PageStyles honoring the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let dim = Style::default().add_modifier(Modifier::DIM);
        let reversed = Style::default().add_modifier(Modifier::REVERSED);

        if config.colors_enabled() {
            Self {
                heading: bold.fg(Color::Cyan),
                accent: bold.fg(Color::Magenta),
                text: Style::default().fg(Color::White),
                muted: Style::default().fg(Color::DarkGray),
                chip: Style::default().fg(Color::Black).bg(Color::Cyan),
                link: Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
                error: Style::default().fg(Color::Red),
                success: Style::default().fg(Color::Green),
                nav_active: bold.fg(Color::Black).bg(Color::Cyan),
                nav_inactive: Style::default().fg(Color::Gray),
                focused: bold.fg(Color::Yellow),
                button: bold.fg(Color::Black).bg(Color::Magenta),
                button_disabled: dim.fg(Color::DarkGray),
                status_bar: Style::default().fg(Color::Black).bg(Color::Gray),
            }
        } else {
            Self {
                heading: bold,
                accent: bold,
                text: Style::default(),
                muted: dim,
                chip: reversed,
                link: Style::default().add_modifier(Modifier::UNDERLINED),
                error: Style::default(),
                success: Style::default(),
                nav_active: reversed,
                nav_inactive: Style::default(),
                focused: bold,
                button: reversed,
                button_disabled: dim,
                status_bar: reversed,
            }
        }
    }
}

impl Default for PageStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
