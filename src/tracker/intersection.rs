//! Viewport-intersection watching.
//!
//! Second detection path for the active section. The viewport is shrunk by a
//! symmetric margin at top and bottom; a section "intersects" once the share
//! of its height inside that shrunken root reaches the threshold. Only the
//! transition from not-intersecting to intersecting is reported.

use super::active::{MeasuredSection, ScrollSnapshot, SectionExtent};
use crate::model::SectionId;
use std::collections::HashSet;

/// A section that just started intersecting the shrunken viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    /// Section the entry reports on.
    pub id: SectionId,
    /// Share of the section's height inside the shrunken viewport, 0.0..=1.0.
    pub ratio: f64,
}

/// Share of `extent` that lies inside the shrunken viewport.
///
/// Unmeasured or zero-height sections report 0.0.
pub fn intersection_ratio(extent: &SectionExtent, snapshot: &ScrollSnapshot, margin: f64) -> f64 {
    if !extent.is_measured() || extent.height() <= 0.0 {
        return 0.0;
    }
    let root_top = snapshot.scroll_y + snapshot.viewport_height * margin;
    let root_bottom = snapshot.viewport_bottom() - snapshot.viewport_height * margin;

    let overlap = extent.bottom.min(root_bottom) - extent.top.max(root_top);
    (overlap.max(0.0) / extent.height()).min(1.0)
}

/// Edge-triggered intersection state for every section.
#[derive(Debug, Clone)]
pub struct IntersectionWatcher {
    margin: f64,
    threshold: f64,
    intersecting: HashSet<SectionId>,
}

impl IntersectionWatcher {
    /// Watcher whose root is shrunk by `margin` of the viewport at both edges.
    pub fn new(margin: f64, threshold: f64) -> Self {
        Self {
            margin,
            threshold,
            intersecting: HashSet::new(),
        }
    }

    /// Visible fraction of a section inside the shrunk root.
    pub fn ratio(&self, extent: &SectionExtent, snapshot: &ScrollSnapshot) -> f64 {
        intersection_ratio(extent, snapshot, self.margin)
    }

    /// Update intersection state and return sections that newly intersect,
    /// in top-to-bottom order.
    pub fn observe(
        &mut self,
        sections: &[MeasuredSection],
        snapshot: &ScrollSnapshot,
    ) -> Vec<IntersectionEntry> {
        let mut entered = Vec::new();
        for section in sections {
            let ratio = self.ratio(&section.extent, snapshot);
            let now_intersecting = ratio > 0.0 && ratio >= self.threshold;

            if now_intersecting {
                if self.intersecting.insert(section.id.clone()) {
                    entered.push(IntersectionEntry {
                        id: section.id.clone(),
                        ratio,
                    });
                }
            } else {
                self.intersecting.remove(&section.id);
            }
        }
        entered
    }

    /// Record current state without reporting any edges.
    pub fn resync(&mut self, sections: &[MeasuredSection], snapshot: &ScrollSnapshot) {
        let _ = self.observe(sections, snapshot);
    }

    /// Whether `id` crossed the threshold in the last update.
    pub fn is_intersecting(&self, id: &SectionId) -> bool {
        self.intersecting.contains(id)
    }

    /// Forget all state, as when observers are disconnected.
    pub fn clear(&mut self) {
        self.intersecting.clear();
    }
}
