//! Navigation rail and status bar content.

use super::styles::PageStyles;
use crate::state::{AppState, Focus};
use ratatui::text::{Line, Span};

/// One rail entry per section, the active one highlighted, then the
/// scroll-to-top affordance once the page has left the top.
pub fn nav_lines(state: &AppState, styles: &PageStyles) -> Vec<Line<'static>> {
    let active = state.active_section();
    let mut lines: Vec<Line<'static>> = state
        .tracker
        .sections()
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let style = if section.id() == active {
                styles.nav_active
            } else {
                styles.nav_inactive
            };
            Line::from(Span::styled(format!(" {} {} ", index + 1, section.label()), style))
        })
        .collect();

    if state.tracker.scroll_to_top_visible() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(" ↑ t: back to top", styles.muted)));
    }
    lines
}

/// Status bar: transient message if any, else the active section, plus key hints.
pub fn status_line(state: &AppState, styles: &PageStyles) -> Line<'static> {
    let left = match state.status_text() {
        Some(text) => text.to_string(),
        None => state
            .tracker
            .sections()
            .find(state.active_section().as_str())
            .map(|section| section.label().to_string())
            .unwrap_or_default(),
    };
    let hints = match state.focus {
        Focus::Page => "j/k scroll  Tab section  i form  ? help  q quit",
        Focus::Form(_) => "Tab field  Ctrl+S send  Esc done",
    };
    Line::from(vec![
        Span::styled(format!(" {left} "), styles.status_bar),
        Span::styled(format!(" {hints}"), styles.muted),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Portfolio, SectionId, SectionRegistry};
    use crate::tracker::{SectionExtent, TrackerConfig};
    use crate::view::page::line_text;
    use std::time::Instant;

    fn laid_out() -> (AppState, Instant) {
        let now = Instant::now();
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
        state.set_layout(20, 120, extents, now);
        state.advance(now);
        (state, now)
    }

    #[test]
    fn rail_lists_sections_with_positions() {
        let (state, _) = laid_out();
        let text: Vec<String> = nav_lines(&state, &PageStyles::default())
            .iter()
            .map(line_text)
            .collect();
        insta::assert_debug_snapshot!(text, @r#"
        [
            " 1 Hero ",
            " 2 Technologies ",
            " 3 Projects ",
            " 4 Experience ",
            " 5 Contact Me ",
            " 6 Get in Touch ",
        ]
        "#);
    }

    #[test]
    fn rail_highlights_active_section() {
        let (mut state, now) = laid_out();
        state
            .navigate_to(&SectionId::new("projects").unwrap(), now)
            .unwrap();
        let styles = PageStyles::default();
        let lines = nav_lines(&state, &styles);

        assert_eq!(lines[2].spans[0].style, styles.nav_active);
        assert_eq!(lines[0].spans[0].style, styles.nav_inactive);
    }

    #[test]
    fn back_to_top_appears_after_scrolling() {
        let (mut state, now) = laid_out();
        state.scroll_to(30.0, now);

        let text: Vec<String> = nav_lines(&state, &PageStyles::default())
            .iter()
            .map(line_text)
            .collect();
        assert_eq!(text.last().map(String::as_str), Some(" ↑ t: back to top"));
    }

    #[test]
    fn status_prefers_transient_message() {
        let (mut state, now) = laid_out();
        assert!(line_text(&status_line(&state, &PageStyles::default())).starts_with(" Hero "));

        state.set_status("Copied to clipboard", now);
        assert!(line_text(&status_line(&state, &PageStyles::default()))
            .starts_with(" Copied to clipboard "));
    }
}
