//! Read-only page geometry consumed by the scroll tracker.

use super::active::{MeasuredSection, ScrollSnapshot, SectionExtent};
use crate::model::{SectionId, SectionRegistry};
use std::collections::HashMap;

/// Source of scroll position and section geometry.
///
/// Implemented by the page layout. The tracker never writes geometry, it only
/// reads it, so implementations can be plain measured values.
pub trait GeometryProvider {
    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;

    /// Height of the visible viewport.
    fn viewport_height(&self) -> f64;

    /// Total height of the scrollable document.
    fn document_height(&self) -> f64;

    /// Extent of a section, or `None` if it has not been laid out yet.
    fn section_extent(&self, id: &SectionId) -> Option<SectionExtent>;
}

/// Capture the scroll position of a provider.
pub fn snapshot(geometry: &dyn GeometryProvider) -> ScrollSnapshot {
    ScrollSnapshot::new(
        geometry.scroll_y(),
        geometry.viewport_height(),
        geometry.document_height(),
    )
}

/// Measure every registered section in top-to-bottom order.
///
/// Sections without geometry get [`SectionExtent::UNMEASURED`].
pub fn measure(sections: &SectionRegistry, geometry: &dyn GeometryProvider) -> Vec<MeasuredSection> {
    sections
        .iter()
        .map(|section| {
            let extent = geometry
                .section_extent(section.id())
                .unwrap_or(SectionExtent::UNMEASURED);
            MeasuredSection::new(section.id().clone(), extent)
        })
        .collect()
}

/// Fixed geometry values.
///
/// Handy wherever geometry is known up front, such as tests and headless runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticGeometry {
    /// Current scroll offset.
    pub scroll_y: f64,
    /// Visible rows.
    pub viewport_height: f64,
    /// Total page height.
    pub document_height: f64,
    /// Measured extents; sections missing here are unmeasured.
    pub extents: HashMap<SectionId, SectionExtent>,
}

impl StaticGeometry {
    /// Page at the top with no sections measured.
    pub fn new(viewport_height: f64, document_height: f64) -> Self {
        Self {
            viewport_height,
            document_height,
            ..Self::default()
        }
    }

    /// Builder-style section registration.
    pub fn with_section(mut self, id: SectionId, extent: SectionExtent) -> Self {
        self.extents.insert(id, extent);
        self
    }

    /// Same page scrolled to `scroll_y`.
    pub fn scrolled_to(mut self, scroll_y: f64) -> Self {
        self.scroll_y = scroll_y;
        self
    }
}

impl GeometryProvider for StaticGeometry {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn document_height(&self) -> f64 {
        self.document_height
    }

    fn section_extent(&self, id: &SectionId) -> Option<SectionExtent> {
        self.extents.get(id).copied()
    }
}
