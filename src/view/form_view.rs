//! Contact form rendering.

use super::page::wrap_text;
use super::styles::PageStyles;
use crate::form::{ContactForm, Field, SubmitStatus, MESSAGE_MAX_CHARS};
use crate::state::{Focus, FormFocus};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

const CURSOR: &str = "█";
const GUTTER: &str = "│ ";
const FOCUSED_GUTTER: &str = "┃ ";
const GUTTER_WIDTH: usize = 2;

/// Contact form fields, errors, banner and submit button.
pub fn form(form: &ContactForm, focus: Focus, width: usize, styles: &PageStyles) -> Vec<Line<'static>> {
    let focused = match focus {
        Focus::Form(inner) => Some(inner),
        Focus::Page => None,
    };
    let mut lines = Vec::new();

    if focused.is_none() {
        lines.push(Line::from(Span::styled(
            "Press i to write a message.",
            styles.muted,
        )));
        lines.push(Line::default());
    }

    for field in Field::ALL {
        let is_focused = focused == Some(FormFocus::Field(field));
        lines.extend(field_lines(form, field, is_focused, width, styles));

        if field == Field::Message {
            lines.push(Line::from(Span::styled(
                format!("{}/{}", form.message_length(), MESSAGE_MAX_CHARS),
                styles.muted,
            )));
        }
        lines.push(Line::default());
    }

    lines.push(submit_button(form, focused == Some(FormFocus::Submit), styles));

    if !form.banner().is_empty() {
        let style = match form.status() {
            SubmitStatus::Success => styles.success,
            SubmitStatus::Error => styles.error,
            SubmitStatus::Sending | SubmitStatus::Idle => styles.muted,
        };
        lines.push(Line::default());
        lines.extend(
            wrap_text(form.banner(), width)
                .into_iter()
                .map(|line| Line::from(Span::styled(line, style))),
        );
    }

    if focused.is_some() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Tab: next   Enter: next/newline   Ctrl+S: send   Esc: done",
            styles.muted,
        )));
    }
    lines
}

fn field_lines(
    form: &ContactForm,
    field: Field,
    focused: bool,
    width: usize,
    styles: &PageStyles,
) -> Vec<Line<'static>> {
    let (gutter, label_style) = if focused {
        (FOCUSED_GUTTER, styles.focused)
    } else {
        (GUTTER, styles.heading)
    };
    let mut lines = vec![Line::from(Span::styled(field.label().to_string(), label_style))];

    let mut value_lines = wrap_text(form.value(field), width.saturating_sub(GUTTER_WIDTH + 1));
    if focused {
        if let Some(last) = value_lines.last_mut() {
            last.push_str(CURSOR);
        }
    }
    lines.extend(value_lines.into_iter().map(|text| {
        Line::from(vec![
            Span::styled(gutter, label_style),
            Span::styled(text, styles.text),
        ])
    }));

    let error = form.error(field);
    if !error.is_empty() {
        lines.extend(
            wrap_text(error, width.saturating_sub(2))
                .into_iter()
                .map(|text| Line::from(Span::styled(format!("  {text}"), styles.error))),
        );
    }
    lines
}

fn submit_button(form: &ContactForm, focused: bool, styles: &PageStyles) -> Line<'static> {
    let label = if form.status() == SubmitStatus::Sending {
        "[ Sending... ]"
    } else {
        "[ Send Message ]"
    };
    let style: Style = if form.can_submit() {
        styles.button
    } else {
        styles.button_disabled
    };
    let marker = if focused { "▸ " } else { "  " };
    Line::from(vec![
        Span::styled(marker, styles.focused),
        Span::styled(label, style),
    ])
}
