//! Tests for the scroll tracker state machine.
//!
//! Time is injected, so timers are driven by passing `t0 + offset`.

use super::*;
use std::time::Duration;

fn id(s: &str) -> SectionId {
    SectionId::new(s).unwrap()
}

fn registry() -> SectionRegistry {
    use crate::model::Section;
    SectionRegistry::new(vec![
        Section::new(id("a"), "A"),
        Section::new(id("b"), "B"),
        Section::new(id("c"), "C"),
    ])
    .unwrap()
}

/// Contiguous 1000px sections, viewport 600, document 5000.
fn page(scroll_y: f64) -> StaticGeometry {
    StaticGeometry::new(600.0, 5000.0)
        .with_section(id("a"), SectionExtent::new(0.0, 1000.0))
        .with_section(id("b"), SectionExtent::new(1000.0, 1000.0))
        .with_section(id("c"), SectionExtent::new(2000.0, 3000.0))
        .scrolled_to(scroll_y)
}

fn tracker() -> ScrollTracker {
    ScrollTracker::new(registry(), TrackerConfig::default())
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn starts_on_first_section_with_no_timers() {
    let tracker = tracker();
    assert_eq!(tracker.active_section(), &id("a"));
    assert!(!tracker.is_programmatic_scroll());
    assert!(!tracker.scroll_to_top_visible());
    assert!(!tracker.frame_pending());
    assert_eq!(tracker.next_deadline(), None);
}

#[test]
fn scroll_schedules_one_frame_and_one_backstop() {
    let mut tracker = tracker();
    let t0 = Instant::now();

    tracker.on_scroll(t0, &page(100.0));
    tracker.on_scroll(t0 + ms(50), &page(200.0));
    tracker.on_scroll(t0 + ms(100), &page(300.0));

    assert!(tracker.frame_pending());
    // Backstop armed by the first event, not pushed back by later ones
    assert_eq!(tracker.next_deadline(), Some(t0 + ms(150)));
}

#[test]
fn frame_updates_active_section_once() {
    let mut tracker = tracker();
    let t0 = Instant::now();
    let geometry = page(1000.0);

    tracker.on_scroll(t0, &geometry);
    assert!(tracker.on_frame(&geometry));
    assert_eq!(tracker.active_section(), &id("b"));

    // No pending frame: nothing recomputed
    assert!(!tracker.frame_pending());
    assert!(!tracker.on_frame(&geometry));
}

#[test]
fn unchanged_result_is_not_reported() {
    let mut tracker = tracker();
    let t0 = Instant::now();
    let geometry = page(50.0);

    tracker.on_scroll(t0, &geometry);
    assert!(!tracker.on_frame(&geometry), "still on first section");
    assert_eq!(tracker.active_section(), &id("a"));
}

#[test]
fn visibility_follows_scroll_threshold() {
    let mut tracker = tracker();
    let t0 = Instant::now();

    tracker.on_scroll(t0, &page(300.0));
    assert!(!tracker.scroll_to_top_visible(), "threshold is exclusive");

    tracker.on_scroll(t0, &page(301.0));
    assert!(tracker.scroll_to_top_visible());

    tracker.on_scroll(t0, &page(0.0));
    assert!(!tracker.scroll_to_top_visible());
}

#[test]
fn backstop_recomputes_when_frames_are_skipped() {
    let mut tracker = tracker();
    let t0 = Instant::now();
    let geometry = page(2200.0);

    tracker.on_scroll(t0, &geometry);
    assert!(!tracker.tick(t0 + ms(149), &geometry), "backstop not due yet");
    assert!(tracker.tick(t0 + ms(150), &geometry));
    assert_eq!(tracker.active_section(), &id("c"));
    assert_eq!(tracker.next_deadline(), None);
}

#[test]
fn frame_and_backstop_for_one_burst_agree() {
    let mut tracker = tracker();
    let t0 = Instant::now();
    let geometry = page(1200.0);

    tracker.on_scroll(t0, &geometry);
    assert!(tracker.on_frame(&geometry));
    assert!(!tracker.tick(t0 + ms(150), &geometry), "backstop sees the same verdict");
    assert_eq!(tracker.active_section(), &id("b"));
}

#[test]
fn scroll_to_section_is_optimistic_and_returns_target() {
    let mut tracker = tracker();
    let t0 = Instant::now();

    let target = tracker.scroll_to_section(&id("c"), t0, &page(0.0)).unwrap();

    assert_eq!(target, Some(2000.0));
    assert_eq!(tracker.active_section(), &id("c"));
    assert!(tracker.is_programmatic_scroll());
    assert_eq!(tracker.next_deadline(), Some(t0 + ms(1000)));
}

#[test]
fn programmatic_scroll_suppresses_passive_updates_until_settled() {
    let mut tracker = tracker();
    let t0 = Instant::now();
    tracker.scroll_to_section(&id("c"), t0, &page(0.0)).unwrap();

    // Mid-animation positions would otherwise select "b"
    let mid = page(1100.0);
    tracker.on_scroll(t0 + ms(100), &mid);
    assert!(!tracker.frame_pending());
    assert!(!tracker.on_frame(&mid));
    assert!(!tracker.tick(t0 + ms(500), &mid));
    assert_eq!(tracker.active_section(), &id("c"));

    // Settled at the target
    let arrived = page(2000.0);
    tracker.tick(t0 + ms(1000), &arrived);
    assert!(!tracker.is_programmatic_scroll());
    assert!(tracker.frame_pending(), "catch-up frame scheduled after settling");
    tracker.on_frame(&arrived);
    assert_eq!(tracker.active_section(), &id("c"));
}

#[test]
fn settling_away_from_target_restores_scroll_verdict() {
    let mut tracker = tracker();
    let t0 = Instant::now();
    let in_b = page(1000.0);

    tracker.on_scroll(t0, &in_b);
    tracker.on_frame(&in_b);
    assert_eq!(tracker.active_section(), &id("b"));

    // Navigation never moves the viewport, e.g. the user scrolled back mid-animation
    tracker.scroll_to_section(&id("c"), t0 + ms(16), &in_b).unwrap();
    assert_eq!(tracker.active_section(), &id("c"));

    tracker.tick(t0 + ms(1016), &in_b);
    assert!(!tracker.is_programmatic_scroll());
    assert!(tracker.on_frame(&in_b));
    assert_eq!(tracker.active_section(), &id("b"));

    // Later passive signals agree with the viewport
    tracker.on_scroll(t0 + ms(1100), &in_b);
    tracker.on_frame(&in_b);
    tracker.tick(t0 + ms(1300), &in_b);
    assert_eq!(tracker.active_section(), &id("b"));
}

#[test]
fn scroll_to_top_then_staying_put_restores_scroll_verdict() {
    let mut tracker = tracker();
    let t0 = Instant::now();
    let in_c = page(2000.0);

    tracker.on_scroll(t0, &in_c);
    tracker.on_frame(&in_c);
    assert_eq!(tracker.active_section(), &id("c"));

    tracker.scroll_to_top(t0 + ms(16));
    assert_eq!(tracker.active_section(), &id("a"));

    tracker.tick(t0 + ms(1016), &in_c);
    tracker.on_frame(&in_c);
    assert_eq!(tracker.active_section(), &id("c"));
}

#[test]
fn repeated_navigation_rearms_settle_delay() {
    let mut tracker = tracker();
    let t0 = Instant::now();

    tracker.scroll_to_section(&id("b"), t0, &page(0.0)).unwrap();
    tracker.scroll_to_section(&id("c"), t0 + ms(600), &page(700.0)).unwrap();

    tracker.tick(t0 + ms(1000), &page(1500.0));
    assert!(tracker.is_programmatic_scroll(), "second navigation still settling");
    tracker.tick(t0 + ms(1600), &page(2000.0));
    assert!(!tracker.is_programmatic_scroll());
}

#[test]
fn scroll_to_unknown_section_is_an_error() {
    let mut tracker = tracker();
    let result = tracker.scroll_to_section(&id("nope"), Instant::now(), &page(0.0));
    assert_eq!(result, Err(TrackerError::UnknownSection("nope".to_string())));
    assert_eq!(tracker.active_section(), &id("a"));
}

#[test]
fn scroll_to_unmeasured_section_is_a_no_op() {
    let mut tracker = tracker();
    let geometry = StaticGeometry::new(600.0, 5000.0)
        .with_section(id("a"), SectionExtent::new(0.0, 1000.0));

    let result = tracker.scroll_to_section(&id("b"), Instant::now(), &geometry);

    assert_eq!(result, Ok(None));
    assert_eq!(tracker.active_section(), &id("a"));
    assert!(!tracker.is_programmatic_scroll());
}

#[test]
fn scroll_to_top_activates_first_section() {
    let mut tracker = tracker();
    let t0 = Instant::now();
    tracker.on_scroll(t0, &page(2500.0));
    tracker.on_frame(&page(2500.0));
    assert_eq!(tracker.active_section(), &id("c"));

    assert_eq!(tracker.scroll_to_top(t0 + ms(10)), 0.0);
    assert_eq!(tracker.active_section(), &id("a"));
    assert!(tracker.is_programmatic_scroll());
}

#[test]
fn bottom_of_document_selects_last_section() {
    let mut tracker = tracker();
    let t0 = Instant::now();
    // viewport bottom 4400 + 600 = 5000 >= 5000 - 100
    let geometry = page(4400.0);
    tracker.on_scroll(t0, &geometry);
    tracker.on_frame(&geometry);
    assert_eq!(tracker.active_section(), &id("c"));
}

#[test]
fn teardown_clears_timers_and_detaches_handlers() {
    let mut tracker = tracker();
    let t0 = Instant::now();
    tracker.scroll_to_section(&id("b"), t0, &page(0.0)).unwrap();
    tracker.on_scroll(t0, &page(500.0));

    tracker.teardown();

    assert!(!tracker.is_attached());
    assert_eq!(tracker.next_deadline(), None);
    assert!(!tracker.frame_pending());

    let far = page(2500.0);
    tracker.on_scroll(t0 + ms(10), &far);
    assert!(!tracker.on_frame(&far));
    assert!(!tracker.tick(t0 + ms(5000), &far));
    assert_eq!(tracker.scroll_to_section(&id("c"), t0, &far), Ok(None));
    assert_eq!(tracker.active_section(), &id("b"), "state frozen after teardown");
}

// ===== Intersection path =====

/// Tall first section, short second section after a gap, tall third.
fn gapped(scroll_y: f64) -> StaticGeometry {
    StaticGeometry::new(600.0, 5000.0)
        .with_section(id("a"), SectionExtent::new(0.0, 2000.0))
        .with_section(id("b"), SectionExtent::new(2100.0, 100.0))
        .with_section(id("c"), SectionExtent::new(2200.0, 2800.0))
        .scrolled_to(scroll_y)
}

#[test]
fn intersection_overrides_when_section_is_more_visible() {
    let mut tracker = tracker();
    let t0 = Instant::now();

    let top = gapped(0.0);
    tracker.on_scroll(t0, &top);
    tracker.on_frame(&top);
    assert_eq!(tracker.active_section(), &id("a"));

    // Scroll math still says "a" (probe 1850), but "b" enters the shrunken
    // viewport [1770, 2130) with 30% visible against a's 11.5%.
    let near_b = gapped(1650.0);
    assert_eq!(tracker.compute(&near_b), id("a"));
    tracker.on_scroll(t0 + ms(16), &near_b);
    assert!(tracker.on_frame(&near_b));
    assert_eq!(tracker.active_section(), &id("b"));
}

#[test]
fn conflicting_signals_do_not_oscillate() {
    let mut tracker = tracker();
    let t0 = Instant::now();

    let top = gapped(0.0);
    tracker.on_scroll(t0, &top);
    tracker.on_frame(&top);

    let near_b = gapped(1650.0);
    let mut history = Vec::new();
    for frame in 1..=10u64 {
        tracker.on_scroll(t0 + ms(16 * frame), &near_b);
        tracker.on_frame(&near_b);
        tracker.tick(t0 + ms(16 * frame), &near_b);
        history.push(tracker.active_section().clone());
    }
    assert!(history.iter().all(|s| s == &id("b")), "history: {history:?}");
}

#[test]
fn intersection_is_suppressed_during_programmatic_scroll() {
    let mut tracker = tracker();
    let t0 = Instant::now();
    tracker.scroll_to_section(&id("c"), t0, &gapped(0.0)).unwrap();

    let passing_b = gapped(1650.0);
    tracker.on_layout_change(t0 + ms(100), &passing_b);
    assert!(tracker.frame_pending());
    assert!(!tracker.on_frame(&passing_b));
    assert_eq!(tracker.active_section(), &id("c"));
}

#[test]
fn layout_change_triggers_recompute() {
    let mut tracker = tracker();
    let t0 = Instant::now();
    let resized = page(1500.0);

    tracker.on_layout_change(t0, &resized);
    assert!(tracker.frame_pending());
    assert!(tracker.on_frame(&resized));
    assert_eq!(tracker.active_section(), &id("b"));
}
