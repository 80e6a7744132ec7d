//! Static page sections rendered as lines.

use super::page::paragraph;
use super::styles::PageStyles;
use crate::model::{ContactInfo, Experience, Hero, Project};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Section title with an underline rule.
pub fn heading(label: &str, styles: &PageStyles) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(label.to_string(), styles.heading)),
        Line::from(Span::styled("─".repeat(label.width()), styles.muted)),
        Line::default(),
    ]
}

/// Name, title, summary and technology chips.
pub fn hero(hero: &Hero, width: usize, styles: &PageStyles) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];
    lines.extend(paragraph(&format!("Hi, I'm {}", hero.name), width, 0, styles.accent));
    lines.extend(paragraph(&hero.title, width, 0, styles.heading));
    lines.push(Line::default());
    lines.extend(paragraph(&hero.summary, width, 0, styles.text));
    lines.push(Line::default());
    lines.extend(paragraph(
        "Tab/n: next section   i: contact me   ?: help",
        width,
        0,
        styles.muted,
    ));
    lines
}

/// Technology chips, flowed left to right.
pub fn technologies(names: &[String], width: usize, styles: &PageStyles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for name in names {
        let chip = format!(" {name} ");
        let chip_width = chip.width();
        let needed = if used == 0 { chip_width } else { chip_width + 1 };
        if used > 0 && used + needed > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            lines.push(Line::default());
            used = 0;
        }
        if used > 0 {
            spans.push(Span::raw(" "));
            used += 1;
        }
        spans.push(Span::styled(chip, styles.chip));
        used += chip_width;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

/// Project cards with their links.
pub fn projects(projects: &[Project], width: usize, styles: &PageStyles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, project) in projects.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.extend(paragraph(&project.title, width, 0, styles.accent));
        lines.extend(paragraph(&project.description, width, 2, styles.text));
        if !project.technologies.is_empty() {
            lines.extend(paragraph(&project.technologies.join(" · "), width, 2, styles.muted));
        }
        if let Some(link) = &project.link {
            lines.push(labelled("Source", link, styles));
        }
        if let Some(demo) = &project.live_demo {
            lines.push(labelled("Live demo", demo, styles));
        }
    }
    lines
}

/// Timeline of experience entries.
pub fn experience(
    experiences: &[Experience],
    width: usize,
    styles: &PageStyles,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, entry) in experiences.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(vec![
            Span::styled(entry.year.clone(), styles.accent),
            Span::raw("  "),
            Span::styled(entry.role.clone(), styles.heading),
            Span::styled(format!(" @ {}", entry.company), styles.text),
        ]));
        lines.extend(paragraph(&entry.description, width, 2, styles.text));
        if !entry.technologies.is_empty() {
            lines.extend(paragraph(&entry.technologies.join(" · "), width, 2, styles.muted));
        }
    }
    lines
}

/// Contact values with the selected one marked, then the copyright footer.
pub fn contact(
    contact: &ContactInfo,
    selected: usize,
    year: i32,
    width: usize,
    styles: &PageStyles,
) -> Vec<Line<'static>> {
    let items = contact.items();
    let selected = selected % items.len();
    let mut lines = Vec::new();

    for (index, (kind, value)) in items.into_iter().enumerate() {
        let (marker, style) = if index == selected {
            ("▸ ", styles.focused)
        } else {
            ("  ", styles.text)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, styles.focused),
            Span::styled(format!("{:<9}", format!("{}:", kind.label())), styles.muted),
            Span::styled(value.to_string(), style),
        ]));
    }
    lines.push(Line::default());
    lines.extend(paragraph(
        "[ / ]: select   c: copy   s: open",
        width,
        0,
        styles.muted,
    ));
    lines.push(Line::default());
    lines.extend(paragraph(
        &format!("© {year} {}", contact.copyright),
        width,
        0,
        styles.muted,
    ));
    lines
}

fn labelled(label: &str, value: &str, styles: &PageStyles) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label}: "), styles.muted),
        Span::styled(value.to_string(), styles.link),
    ])
}
