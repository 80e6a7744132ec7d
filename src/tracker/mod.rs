//! Active-section scroll tracker.
//!
//! Tracks which page section is active and drives the navigation rail.
//! Two producers feed one reducer:
//!
//! - the scroll path recomputes [`compute_active_section`] at most once per
//!   frame, plus a debounced backstop in case frames are skipped;
//! - the intersection path reports sections entering a shrunken viewport.
//!
//! Both are suppressed while a programmatic scroll settles. Time is passed
//! in by the caller so every timer is deterministic under test.

pub mod active;
pub mod geometry;
pub mod intersection;

pub use active::{
    compute_active_section, MeasuredSection, ScrollSnapshot, SectionExtent, TrackerConfig,
};
pub use geometry::{GeometryProvider, StaticGeometry};
pub use intersection::{IntersectionEntry, IntersectionWatcher};

use crate::model::{SectionId, SectionRegistry};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors returned by tracker navigation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// Navigation requested to a section that is not registered.
    #[error("Unknown section: {0}")]
    UnknownSection(String),
}

/// Where a state change came from.
#[derive(Debug, Clone, PartialEq)]
enum ActiveSignal {
    Scroll(SectionId),
    Intersection(IntersectionEntry),
}

/// Active-section state machine.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    sections: SectionRegistry,
    config: TrackerConfig,
    active: SectionId,
    is_programmatic_scroll: bool,
    /// Whether the scroll-to-top affordance should render.
    visibility: bool,
    frame_pending: bool,
    backstop_deadline: Option<Instant>,
    settle_deadline: Option<Instant>,
    /// Last verdict of the scroll path; it only emits when this changes.
    /// Forgotten when a programmatic scroll overrides the active section.
    last_computed: Option<SectionId>,
    intersections: IntersectionWatcher,
    attached: bool,
}

impl ScrollTracker {
    /// Create a tracker with the first section active.
    pub fn new(sections: SectionRegistry, config: TrackerConfig) -> Self {
        let active = sections.first().id().clone();
        let intersections =
            IntersectionWatcher::new(config.intersection_margin, config.intersection_threshold);
        Self {
            sections,
            config,
            active,
            is_programmatic_scroll: false,
            visibility: false,
            frame_pending: false,
            backstop_deadline: None,
            settle_deadline: None,
            last_computed: None,
            intersections,
            attached: true,
        }
    }

    /// Section currently highlighted in navigation.
    pub fn active_section(&self) -> &SectionId {
        &self.active
    }

    /// Registered sections in document order.
    pub fn sections(&self) -> &SectionRegistry {
        &self.sections
    }

    /// Thresholds and delays in effect.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// True from a navigation request until its settle delay fires.
    pub fn is_programmatic_scroll(&self) -> bool {
        self.is_programmatic_scroll
    }

    /// Whether the scroll-to-top affordance should render.
    pub fn scroll_to_top_visible(&self) -> bool {
        self.visibility
    }

    /// Whether a scroll recompute is waiting for the next frame.
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Whether listeners are attached.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Earliest pending timer, for bounding the event loop's wait.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.settle_deadline, self.backstop_deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Active section according to scroll math alone.
    pub fn compute(&self, geometry: &dyn GeometryProvider) -> SectionId {
        let measured = geometry::measure(&self.sections, geometry);
        let snapshot = geometry::snapshot(geometry);
        compute_active_section(&snapshot, &measured, &self.config)
            .cloned()
            .unwrap_or_else(|| self.sections.first().id().clone())
    }

    /// Scroll event handler. Safe to call for every raw event.
    ///
    /// Updates the scroll-to-top affordance, then schedules one frame
    /// recomputation and one backstop, unless either is already pending.
    /// While a programmatic scroll settles nothing is scheduled.
    pub fn on_scroll(&mut self, now: Instant, geometry: &dyn GeometryProvider) {
        if !self.attached {
            return;
        }
        self.visibility = geometry.scroll_y() > self.config.scroll_top_threshold;

        if self.is_programmatic_scroll {
            return;
        }
        self.frame_pending = true;
        if self.backstop_deadline.is_none() {
            self.backstop_deadline = Some(now + self.config.backstop_delay);
        }
    }

    /// Layout changed (resize, content load): recompute on the next frame.
    pub fn on_layout_change(&mut self, now: Instant, geometry: &dyn GeometryProvider) {
        if !self.attached {
            return;
        }
        self.visibility = geometry.scroll_y() > self.config.scroll_top_threshold;
        self.frame_pending = true;
        if self.backstop_deadline.is_none() && !self.is_programmatic_scroll {
            self.backstop_deadline = Some(now + self.config.backstop_delay);
        }
    }

    /// Animation-frame callback: runs the pending recomputation, if any.
    ///
    /// Returns true if the active section changed.
    pub fn on_frame(&mut self, geometry: &dyn GeometryProvider) -> bool {
        if !self.attached || !self.frame_pending {
            return false;
        }
        self.frame_pending = false;
        trace!(scroll_y = geometry.scroll_y(), "tracker frame");

        let measured = geometry::measure(&self.sections, geometry);
        let snapshot = geometry::snapshot(geometry);

        let mut changed = self.recompute(&snapshot, &measured);
        changed |= self.observe_intersections(&snapshot, &measured);
        changed
    }

    /// Fire due timers. Returns true if the active section changed.
    pub fn tick(&mut self, now: Instant, geometry: &dyn GeometryProvider) -> bool {
        if !self.attached {
            return false;
        }

        if self.settle_deadline.is_some_and(|deadline| deadline <= now) {
            self.settle_deadline = None;
            self.is_programmatic_scroll = false;
            debug!(active = %self.active, "programmatic scroll settled");

            // Edges crossed during the programmatic scroll are not replayed.
            let measured = geometry::measure(&self.sections, geometry);
            let snapshot = geometry::snapshot(geometry);
            self.intersections.resync(&measured, &snapshot);
            self.visibility = geometry.scroll_y() > self.config.scroll_top_threshold;
            self.frame_pending = true;
        }

        if self.backstop_deadline.is_some_and(|deadline| deadline <= now) {
            self.backstop_deadline = None;
            let measured = geometry::measure(&self.sections, geometry);
            let snapshot = geometry::snapshot(geometry);
            return self.recompute(&snapshot, &measured);
        }

        false
    }

    /// Start a programmatic scroll to `id`.
    ///
    /// Sets the section active immediately and suppresses passive updates
    /// until the settle delay elapses. Returns the offset the host should
    /// scroll to (the section's top), or `None` if the section has not been
    /// measured yet, in which case nothing changes.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::UnknownSection` if `id` is not registered.
    pub fn scroll_to_section(
        &mut self,
        id: &SectionId,
        now: Instant,
        geometry: &dyn GeometryProvider,
    ) -> Result<Option<f64>, TrackerError> {
        if !self.sections.contains(id) {
            return Err(TrackerError::UnknownSection(id.to_string()));
        }
        if !self.attached {
            return Ok(None);
        }
        let Some(extent) = geometry.section_extent(id).filter(SectionExtent::is_measured) else {
            debug!(section = %id, "scroll requested before section was measured");
            return Ok(None);
        };

        self.begin_programmatic(id.clone(), now);
        Ok(Some(extent.top.max(0.0)))
    }

    /// Programmatic scroll back to the top of the page; the first section becomes active.
    pub fn scroll_to_top(&mut self, now: Instant) -> f64 {
        if self.attached {
            let first = self.sections.first().id().clone();
            self.begin_programmatic(first, now);
        }
        0.0
    }

    /// Detach: clear every pending timer. All handlers are no-ops afterwards.
    pub fn teardown(&mut self) {
        self.attached = false;
        self.frame_pending = false;
        self.backstop_deadline = None;
        self.settle_deadline = None;
        self.is_programmatic_scroll = false;
        self.intersections.clear();
        debug!("scroll tracker detached");
    }

    fn begin_programmatic(&mut self, id: SectionId, now: Instant) {
        self.is_programmatic_scroll = true;
        self.frame_pending = false;
        self.backstop_deadline = None;
        self.settle_deadline = Some(now + self.config.settle_delay);
        // The first verdict after settling must be compared against the new target
        self.last_computed = None;
        if self.active != id {
            debug!(from = %self.active, to = %id, "programmatic section change");
            self.active = id;
        }
    }

    /// Scroll path: emit only when the scroll verdict itself changes.
    fn recompute(&mut self, snapshot: &ScrollSnapshot, measured: &[MeasuredSection]) -> bool {
        if self.is_programmatic_scroll {
            return false;
        }
        let Some(verdict) = compute_active_section(snapshot, measured, &self.config).cloned()
        else {
            return false;
        };
        if self.last_computed.as_ref() == Some(&verdict) {
            return false;
        }
        self.last_computed = Some(verdict.clone());
        self.apply(ActiveSignal::Scroll(verdict), snapshot, measured)
    }

    /// Intersection path: the most visible newly-intersecting section, if any.
    fn observe_intersections(
        &mut self,
        snapshot: &ScrollSnapshot,
        measured: &[MeasuredSection],
    ) -> bool {
        let entered = self.intersections.observe(measured, snapshot);
        let best = entered.into_iter().fold(None::<IntersectionEntry>, |best, entry| match best {
            Some(b) if b.ratio >= entry.ratio => Some(b),
            _ => Some(entry),
        });
        match best {
            Some(entry) => self.apply(ActiveSignal::Intersection(entry), snapshot, measured),
            None => false,
        }
    }

    /// The single state-update function for both detection paths.
    fn apply(
        &mut self,
        signal: ActiveSignal,
        snapshot: &ScrollSnapshot,
        measured: &[MeasuredSection],
    ) -> bool {
        if !self.attached || self.is_programmatic_scroll {
            return false;
        }

        let candidate = match signal {
            ActiveSignal::Scroll(id) => id,
            ActiveSignal::Intersection(entry) => {
                // Only override when the entering section is more visible than the current one.
                let current_ratio = measured
                    .iter()
                    .find(|m| m.id == self.active)
                    .map(|m| self.intersections.ratio(&m.extent, snapshot))
                    .unwrap_or(0.0);
                if entry.ratio <= current_ratio {
                    return false;
                }
                entry.id
            }
        };

        if candidate == self.active || !self.sections.contains(&candidate) {
            return false;
        }
        debug!(from = %self.active, to = %candidate, "active section changed");
        self.active = candidate;
        true
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
