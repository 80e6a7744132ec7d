//! Tests for page layout and text wrapping.

use super::*;
use crate::form::Field;
use crate::model::{Portfolio, SectionRegistry};
use crate::tracker::TrackerConfig;

fn state() -> AppState {
    AppState::new(
        Portfolio::default(),
        SectionRegistry::portfolio(),
        TrackerConfig::for_rows(),
    )
}

#[test]
fn wrap_breaks_on_word_boundaries() {
    assert_eq!(
        wrap_text("the quick brown fox jumps", 10),
        vec!["the quick", "brown fox", "jumps"]
    );
}

#[test]
fn wrap_splits_words_wider_than_the_line() {
    assert_eq!(wrap_text("abcdefghijkl", 5), vec!["abcde", "fghij", "kl"]);
}

#[test]
fn wrap_measures_display_width() {
    // each ideograph is two columns wide
    assert_eq!(wrap_text("日本語", 4), vec!["日本", "語"]);
}

#[test]
fn wrap_keeps_explicit_newlines_and_empty_text() {
    assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    assert_eq!(wrap_text("", 10), vec![""]);
}

#[test]
fn paragraph_indents_every_line() {
    let lines = paragraph("one two three", 9, 2, Style::default());
    let text: Vec<String> = lines.iter().map(line_text).collect();
    insta::assert_debug_snapshot!(text, @r#"
    [
        "  one two",
        "  three",
    ]
    "#);
}

#[test]
fn layout_measures_every_section_in_order() {
    let layout = PageLayout::build(&state(), 60, &PageStyles::default(), 2026);
    let ids: Vec<&str> = layout.extents().iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["hero", "technologies", "projects", "experience", "form", "contact"]
    );

    let mut previous_bottom = 0.0;
    for (id, extent) in layout.extents() {
        assert!(extent.height() > 0.0, "{id} has no rows");
        assert!(extent.top >= previous_bottom, "{id} overlaps the previous section");
        previous_bottom = extent.bottom;
    }
    assert_eq!(previous_bottom, layout.height() as f64);
}

#[test]
fn section_top_is_its_heading() {
    let layout = PageLayout::build(&state(), 60, &PageStyles::default(), 2026);
    let (_, projects) = &layout.extents()[2];
    assert_eq!(line_text(&layout.lines()[projects.top as usize]), "Projects");
}

#[test]
fn narrower_page_is_taller() {
    let wide = PageLayout::build(&state(), 80, &PageStyles::default(), 2026);
    let narrow = PageLayout::build(&state(), 24, &PageStyles::default(), 2026);
    assert!(narrow.height() > wide.height());
}

#[test]
fn form_errors_push_later_sections_down() {
    let mut state = state();
    let before = PageLayout::build(&state, 60, &PageStyles::default(), 2026);

    state.form.on_field_blur(Field::Name);
    let after = PageLayout::build(&state, 60, &PageStyles::default(), 2026);

    assert!(after.extents()[5].1.top > before.extents()[5].1.top);
    assert_eq!(after.extents()[3], before.extents()[3]);
}

#[test]
fn visible_clamps_to_page() {
    let layout = PageLayout::build(&state(), 60, &PageStyles::default(), 2026);
    let height = layout.height();

    assert_eq!(layout.visible(0, 10).len(), 10);
    assert_eq!(layout.visible(height - 3, 10).len(), 3);
    assert!(layout.visible(height + 5, 10).is_empty());
}
