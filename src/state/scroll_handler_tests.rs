//! Tests for page scrolling and section navigation.

use super::*;
use crate::model::{Portfolio, SectionId, SectionRegistry};
use crate::state::app_state::ANIMATION_FRAME;
use crate::tracker::{SectionExtent, TrackerConfig};

fn id(s: &str) -> SectionId {
    SectionId::new(s).unwrap()
}

/// Six 20-row sections, 10-row viewport, 120-row document.
fn state(now: Instant) -> AppState {
    let registry = SectionRegistry::portfolio();
    let extents: Vec<_> = registry
        .iter()
        .enumerate()
        .map(|(i, s)| (s.id().clone(), SectionExtent::new(i as f64 * 20.0, 20.0)))
        .collect();
    let mut state = AppState::new(Portfolio::default(), registry, TrackerConfig::for_rows());
    state.set_layout(10, 120, extents, now);
    state.advance(now);
    state
}

fn finish_animation(state: &mut AppState, start: Instant) {
    let mut now = start;
    while state.is_animating() {
        state.advance(now);
        now += ANIMATION_FRAME;
    }
}

#[test]
fn row_scrolling_moves_one_row() {
    let t0 = Instant::now();
    let mut state = state(t0);

    handle_scroll_action(&mut state, KeyAction::ScrollDown, t0);
    handle_scroll_action(&mut state, KeyAction::ScrollDown, t0);
    handle_scroll_action(&mut state, KeyAction::ScrollUp, t0);

    assert_eq!(state.scroll_offset(), 1);
}

#[test]
fn page_scrolling_keeps_one_row_of_context() {
    let t0 = Instant::now();
    let mut state = state(t0);

    handle_scroll_action(&mut state, KeyAction::PageDown, t0);
    assert_eq!(state.scroll_offset(), 9);

    handle_scroll_action(&mut state, KeyAction::PageUp, t0);
    assert_eq!(state.scroll_offset(), 0);
}

#[test]
fn scroll_to_bottom_activates_last_section() {
    let t0 = Instant::now();
    let mut state = state(t0);

    handle_scroll_action(&mut state, KeyAction::ScrollToBottom, t0);
    state.advance(t0);

    assert_eq!(state.scroll_offset(), 110);
    assert_eq!(state.active_section(), &id("contact"));
}

#[test]
fn next_and_prev_section_step_from_active() {
    let t0 = Instant::now();
    let mut state = state(t0);

    handle_scroll_action(&mut state, KeyAction::NextSection, t0);
    assert_eq!(state.active_section(), &id("technologies"));
    handle_scroll_action(&mut state, KeyAction::NextSection, t0);
    assert_eq!(state.active_section(), &id("projects"));
    handle_scroll_action(&mut state, KeyAction::PrevSection, t0);
    assert_eq!(state.active_section(), &id("technologies"));

    finish_animation(&mut state, t0);
    assert_eq!(state.scroll_offset(), 20);
}

#[test]
fn prev_section_at_first_stays_on_first() {
    let t0 = Instant::now();
    let mut state = state(t0);

    handle_scroll_action(&mut state, KeyAction::PrevSection, t0);

    assert_eq!(state.active_section(), &id("hero"));
    assert!(!state.is_animating(), "already at the target offset");
}

#[test]
fn jump_to_section_is_one_based() {
    let t0 = Instant::now();
    let mut state = state(t0);

    handle_scroll_action(&mut state, KeyAction::JumpToSection(5), t0);
    assert_eq!(state.active_section(), &id("form"));

    finish_animation(&mut state, t0);
    assert_eq!(state.scroll_offset(), 80);
}

#[test]
fn jump_past_last_section_is_ignored() {
    let t0 = Instant::now();
    let mut state = state(t0);

    handle_scroll_action(&mut state, KeyAction::JumpToSection(9), t0);
    handle_scroll_action(&mut state, KeyAction::JumpToSection(0), t0);

    assert_eq!(state.active_section(), &id("hero"));
    assert!(!state.is_animating());
}

#[test]
fn scroll_to_top_is_programmatic() {
    let t0 = Instant::now();
    let mut state = state(t0);
    handle_scroll_action(&mut state, KeyAction::JumpToSection(4), t0);
    finish_animation(&mut state, t0);

    handle_scroll_action(&mut state, KeyAction::ScrollToTop, t0);

    assert_eq!(state.active_section(), &id("hero"));
    assert!(state.tracker.is_programmatic_scroll());
    finish_animation(&mut state, t0);
    assert_eq!(state.scroll_offset(), 0);
}

#[test]
fn non_navigation_actions_are_ignored() {
    let t0 = Instant::now();
    let mut state = state(t0);

    handle_scroll_action(&mut state, KeyAction::Help, t0);

    assert_eq!(state.scroll_offset(), 0);
    assert!(!state.tracker.frame_pending());
}
