//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the section navigation rail, including its border.
pub const NAV_RAIL_WIDTH: u16 = 22;

/// Narrowest terminal that still shows the navigation rail.
///
/// Below this the page takes the full width and the active section is only
/// named in the status bar.
pub const NAV_RAIL_MIN_TERMINAL_WIDTH: u16 = 60;

/// Horizontal padding on each side of the page text.
pub const PAGE_PADDING: u16 = 2;

/// Widest the page text is allowed to get, for readable line lengths.
pub const PAGE_MAX_WIDTH: u16 = 96;

/// Blank rows rendered between sections.
pub const SECTION_GAP: usize = 2;

/// Rows moved per mouse wheel notch.
pub const MOUSE_SCROLL_ROWS: f64 = 3.0;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Longest the event loop sleeps with nothing scheduled.
pub const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Poll interval while a form submission is in flight.
pub const SUBMIT_POLL_INTERVAL: Duration = Duration::from_millis(50);
