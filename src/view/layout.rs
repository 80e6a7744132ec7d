//! Screen layout rendering.
//!
//! Pure layout logic: splits the terminal into the navigation rail, the page
//! viewport and the status bar, then paints the visible slice of the page.

use super::constants::{
    NAV_RAIL_MIN_TERMINAL_WIDTH, NAV_RAIL_WIDTH, PAGE_MAX_WIDTH, PAGE_PADDING, STATUS_BAR_HEIGHT,
};
use super::nav::{nav_lines, status_line};
use super::page::PageLayout;
use super::styles::PageStyles;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Where each part of the screen goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Navigation rail; absent on narrow terminals.
    pub rail: Option<Rect>,
    /// Page text, padded and capped to a readable width.
    pub page: Rect,
    /// Bottom status line.
    pub status: Rect,
}

impl ScreenAreas {
    /// Viewport height in rows, as the scroll tracker sees it.
    pub fn viewport_height(&self) -> usize {
        usize::from(self.page.height)
    }
}

/// Split `area` into rail, page and status bar.
pub fn calculate_areas(area: Rect) -> ScreenAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
        .split(area);
    let (body, status) = (vertical[0], vertical[1]);

    let (rail, content) = if area.width >= NAV_RAIL_MIN_TERMINAL_WIDTH {
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(NAV_RAIL_WIDTH), Constraint::Min(0)])
            .split(body);
        (Some(horizontal[0]), horizontal[1])
    } else {
        (None, body)
    };

    ScreenAreas {
        rail,
        page: page_text_area(content),
        status,
    }
}

/// Inset `content` by the page padding and cap its width.
fn page_text_area(content: Rect) -> Rect {
    let inner_width = content
        .width
        .saturating_sub(PAGE_PADDING * 2)
        .clamp(1.min(content.width), PAGE_MAX_WIDTH);
    Rect {
        x: content.x + PAGE_PADDING.min(content.width),
        y: content.y,
        width: inner_width,
        height: content.height,
    }
}

/// Paint one frame.
pub fn render_layout(
    frame: &mut Frame,
    state: &AppState,
    page: &PageLayout,
    areas: &ScreenAreas,
    styles: &PageStyles,
) {
    if let Some(rail) = areas.rail {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(styles.muted)
            .title(" folio ")
            .title_style(styles.accent);
        frame.render_widget(Paragraph::new(nav_lines(state, styles)).block(block), rail);
    }

    let visible = page.visible(state.scroll_offset(), areas.viewport_height());
    frame.render_widget(Paragraph::new(visible.to_vec()), areas.page);

    frame.render_widget(Paragraph::new(status_line(state, styles)), areas.status);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_terminal_gets_rail() {
        let areas = calculate_areas(Rect::new(0, 0, 100, 30));

        assert_eq!(areas.rail, Some(Rect::new(0, 0, NAV_RAIL_WIDTH, 29)));
        assert_eq!(areas.status, Rect::new(0, 29, 100, 1));
        assert_eq!(areas.page.x, NAV_RAIL_WIDTH + PAGE_PADDING);
        assert_eq!(areas.page.width, 100 - NAV_RAIL_WIDTH - PAGE_PADDING * 2);
        assert_eq!(areas.viewport_height(), 29);
    }

    #[test]
    fn narrow_terminal_drops_rail() {
        let areas = calculate_areas(Rect::new(0, 0, 40, 12));

        assert_eq!(areas.rail, None);
        assert_eq!(areas.page, Rect::new(PAGE_PADDING, 0, 40 - PAGE_PADDING * 2, 11));
    }

    #[test]
    fn page_width_is_capped() {
        let areas = calculate_areas(Rect::new(0, 0, 250, 40));
        assert_eq!(areas.page.width, PAGE_MAX_WIDTH);
    }

    #[test]
    fn zero_sized_terminal_does_not_panic() {
        let areas = calculate_areas(Rect::new(0, 0, 0, 0));
        assert_eq!(areas.page.width, 0);
        assert_eq!(areas.viewport_height(), 0);
    }
}
