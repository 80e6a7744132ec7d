//! Active-section computation (pure).
//!
//! Decides which section the reader is looking at from the scroll offset,
//! the viewport height and the vertical extent of every section. No state,
//! no clock, no I/O: identical inputs always produce the identical section.

use crate::model::SectionId;
use std::time::Duration;

/// Vertical extent of a section in document coordinates.
///
/// Units are whatever the host measures in (pixels in a browser, rows in the
/// terminal). `bottom` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    /// First row of the section.
    pub top: f64,
    /// Row just past the section.
    pub bottom: f64,
}

impl SectionExtent {
    /// Extent given to a section whose geometry has not been measured.
    ///
    /// Every band test against it fails, so it can never be picked by the
    /// band or midpoint rules.
    pub const UNMEASURED: Self = Self {
        top: f64::INFINITY,
        bottom: f64::NEG_INFINITY,
    };

    /// Extent starting at `top` spanning `height` rows.
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }

    /// Rows covered. Meaningless when unmeasured.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// False for sections that have no geometry yet.
    pub fn is_measured(&self) -> bool {
        self.top.is_finite() && self.bottom.is_finite()
    }
}

/// A section identifier paired with its current extent.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredSection {
    /// Section identifier.
    pub id: SectionId,
    /// Where the section sits on the page.
    pub extent: SectionExtent,
}

impl MeasuredSection {
    /// Pair an id with its extent.
    pub fn new(id: SectionId, extent: SectionExtent) -> Self {
        Self { id, extent }
    }
}

/// Scroll position and page size at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSnapshot {
    /// Rows scrolled past the top of the page.
    pub scroll_y: f64,
    /// Visible rows.
    pub viewport_height: f64,
    /// Total page height in rows.
    pub document_height: f64,
}

impl ScrollSnapshot {
    /// Snapshot of one scroll position.
    pub fn new(scroll_y: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_y,
            viewport_height,
            document_height,
        }
    }

    /// Offset of the bottom edge of the viewport.
    pub fn viewport_bottom(&self) -> f64 {
        self.scroll_y + self.viewport_height
    }

    /// The synthetic coordinate used to decide section activity.
    pub fn probe(&self, config: &TrackerConfig) -> f64 {
        self.scroll_y + self.viewport_height * config.probe_fraction
    }
}

/// Tunable thresholds for the scroll tracker.
///
/// The defaults are browser pixel values. [`TrackerConfig::for_rows`] gives
/// values suited to a terminal where one unit is a text row.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Fraction of the viewport height added to the scroll offset to form the probe.
    pub probe_fraction: f64,
    /// Section bands are shifted up by this amount: `[top - m, bottom - m)`.
    pub band_margin: f64,
    /// Distance from the document end within which the last section is forced active.
    pub bottom_snap: f64,
    /// Scroll offset above which the scroll-to-top affordance is shown.
    pub scroll_top_threshold: f64,
    /// How long passive updates stay suppressed after a programmatic scroll.
    pub settle_delay: Duration,
    /// Backstop recomputation delay in case animation frames are skipped.
    pub backstop_delay: Duration,
    /// Fraction of the viewport trimmed from both top and bottom for intersection watching.
    pub intersection_margin: f64,
    /// Visible ratio a section must reach to count as intersecting.
    pub intersection_threshold: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            probe_fraction: 1.0 / 3.0,
            band_margin: 100.0,
            bottom_snap: 100.0,
            scroll_top_threshold: 300.0,
            settle_delay: Duration::from_millis(1000),
            backstop_delay: Duration::from_millis(150),
            intersection_margin: 0.2,
            intersection_threshold: 0.1,
        }
    }
}

impl TrackerConfig {
    /// Thresholds scaled for a terminal, one unit per row.
    pub fn for_rows() -> Self {
        Self {
            band_margin: 3.0,
            bottom_snap: 2.0,
            scroll_top_threshold: 10.0,
            ..Self::default()
        }
    }
}

/// Determine the active section.
///
/// Rules, in priority order:
/// 1. Bottom snap: when the viewport bottom is within `bottom_snap` of the
///    document end, the last section wins.
/// 2. Bands: the first section (top to bottom) whose `[top - m, bottom - m)`
///    band contains the probe wins.
/// 3. Gaps: between consecutive sections, the probe picks the nearer one by
///    the midpoint of `bottom_i` and `top_{i+1}`.
/// 4. Otherwise the first section.
///
/// Returns `None` only when `sections` is empty.
pub fn compute_active_section<'a>(
    snapshot: &ScrollSnapshot,
    sections: &'a [MeasuredSection],
    config: &TrackerConfig,
) -> Option<&'a SectionId> {
    let first = sections.first()?;
    let last = sections.last()?;

    if snapshot.viewport_bottom() >= snapshot.document_height - config.bottom_snap {
        return Some(&last.id);
    }

    let probe = snapshot.probe(config);
    let margin = config.band_margin;

    if let Some(hit) = sections
        .iter()
        .find(|s| probe >= s.extent.top - margin && probe < s.extent.bottom - margin)
    {
        return Some(&hit.id);
    }

    for pair in sections.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        let midpoint = (current.extent.bottom + next.extent.top) / 2.0;

        if probe >= current.extent.bottom - margin && probe < midpoint {
            return Some(&current.id);
        }
        if probe >= midpoint && probe < next.extent.top + margin {
            return Some(&next.id);
        }
    }

    Some(&first.id)
}
