//! Page layout: the whole portfolio as one column of pre-wrapped lines.
//!
//! Building the page also measures it. Every section records the rows it
//! occupies, and those extents are what the scroll tracker sees, so the
//! active section always agrees with what is on screen.

use super::constants::SECTION_GAP;
use super::styles::PageStyles;
use super::{form_view, sections};
use crate::model::SectionId;
use crate::state::AppState;
use crate::tracker::SectionExtent;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Rendered page plus the measured extent of every section.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    lines: Vec<Line<'static>>,
    extents: Vec<(SectionId, SectionExtent)>,
}

impl PageLayout {
    /// Lay out every registered section, top to bottom, at `width` columns.
    pub fn build(state: &AppState, width: u16, styles: &PageStyles, year: i32) -> Self {
        let width = usize::from(width.max(1));
        let portfolio = state.portfolio();
        let mut layout = Self::default();

        for (index, section) in state.tracker.sections().iter().enumerate() {
            if index > 0 {
                layout.lines.extend((0..SECTION_GAP).map(|_| Line::default()));
            }
            let top = layout.lines.len();

            let body = match section.id().as_str() {
                "hero" => sections::hero(&portfolio.hero, width, styles),
                "technologies" => sections::technologies(&portfolio.technologies, width, styles),
                "projects" => sections::projects(&portfolio.projects, width, styles),
                "experience" => sections::experience(&portfolio.experiences, width, styles),
                "form" => form_view::form(&state.form, state.focus, width, styles),
                "contact" => {
                    sections::contact(&portfolio.contact, state.selected_contact, year, width, styles)
                }
                _ => Vec::new(),
            };
            if section.id().as_str() != "hero" {
                layout.lines.extend(sections::heading(section.label(), styles));
            }
            layout.lines.extend(body);

            let height = layout.lines.len() - top;
            layout
                .extents
                .push((section.id().clone(), SectionExtent::new(top as f64, height as f64)));
        }
        layout
    }

    /// Total page height in rows.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Rendered page lines.
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Section extents in registry order.
    pub fn extents(&self) -> &[(SectionId, SectionExtent)] {
        &self.extents
    }

    /// Rows visible from `offset` in a viewport `rows` tall.
    pub fn visible(&self, offset: usize, rows: usize) -> &[Line<'static>] {
        let start = offset.min(self.lines.len());
        let end = start.saturating_add(rows).min(self.lines.len());
        &self.lines[start..end]
    }
}

/// Greedy word wrap by display width.
///
/// Explicit newlines start a new line; words wider than `width` are broken
/// mid-word. Always returns at least one line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if line_width > 0 && line_width + 1 + word_width > width {
                out.push(std::mem::take(&mut line));
                line_width = 0;
            }

            if word_width > width {
                for c in word.chars() {
                    let char_width = c.width().unwrap_or(0);
                    if line_width > 0 && line_width + char_width > width {
                        out.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                    line.push(c);
                    line_width += char_width;
                }
                continue;
            }

            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }
        out.push(line);
    }
    out
}

/// Wrap `text` into styled lines indented by `indent` columns.
pub fn paragraph(text: &str, width: usize, indent: usize, style: Style) -> Vec<Line<'static>> {
    wrap_text(text, width.saturating_sub(indent))
        .into_iter()
        .map(|line| {
            Line::from(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled(line, style),
            ])
        })
        .collect()
}

/// Plain text of a line, for tests and width checks.
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
