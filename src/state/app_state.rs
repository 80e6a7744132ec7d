//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. Time is passed
//! in explicitly so every transition is testable without a terminal.

use crate::form::{ContactForm, Field};
use crate::model::{Portfolio, SectionId, SectionRegistry};
use crate::tracker::{ScrollTracker, SectionExtent, StaticGeometry, TrackerConfig, TrackerError};
use std::time::{Duration, Instant};
use tracing::debug;

/// How long a transient status message stays on screen.
pub const STATUS_DURATION: Duration = Duration::from_secs(2);

/// Interval between smooth-scroll animation steps.
pub const ANIMATION_FRAME: Duration = Duration::from_millis(16);

// ===== Focus =====

/// Which element receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Page navigation via key bindings.
    #[default]
    Page,
    /// Editing the contact form.
    Form(FormFocus),
}

/// Focused control inside the contact form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    /// An input field.
    Field(Field),
    /// The submit button.
    Submit,
}

impl FormFocus {
    /// Focus when the form is entered.
    pub const FIRST: FormFocus = FormFocus::Field(Field::Name);

    /// Next stop, wrapping to the first field.
    pub fn next(self) -> FormFocus {
        match self {
            FormFocus::Field(field) => field.next().map_or(FormFocus::Submit, FormFocus::Field),
            FormFocus::Submit => FormFocus::FIRST,
        }
    }

    /// Previous stop, wrapping to the button.
    pub fn prev(self) -> FormFocus {
        match self {
            FormFocus::Field(field) => field.prev().map_or(FormFocus::Submit, FormFocus::Field),
            FormFocus::Submit => FormFocus::Field(Field::Message),
        }
    }

    /// The focused field, `None` on the button.
    pub fn field(self) -> Option<Field> {
        match self {
            FormFocus::Field(field) => Some(field),
            FormFocus::Submit => None,
        }
    }
}

/// Transient one-line message shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Message shown in the status bar.
    pub text: String,
    /// When the message disappears.
    pub expires_at: Instant,
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # Scrolling
///
/// The page is one tall document measured in rows. `geometry` holds the
/// current scroll offset plus the section extents from the last layout.
/// User scrolling moves the offset directly; section navigation animates
/// toward a target one row step per [`ANIMATION_FRAME`].
#[derive(Debug, Clone)]
pub struct AppState {
    portfolio: Portfolio,

    /// Active-section tracker driving the navigation rail.
    pub tracker: ScrollTracker,

    /// Contact form values and submit status.
    pub form: ContactForm,

    /// Which element has keyboard focus.
    pub focus: Focus,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// Index into `ContactInfo::items()` of the selected contact value.
    pub selected_contact: usize,

    status: Option<StatusMessage>,
    geometry: StaticGeometry,
    scroll_target: Option<f64>,
    next_animation_frame: Option<Instant>,
}

impl AppState {
    /// Start at the top of the page with the first section active.
    pub fn new(portfolio: Portfolio, sections: SectionRegistry, config: TrackerConfig) -> Self {
        Self {
            portfolio,
            tracker: ScrollTracker::new(sections, config),
            form: ContactForm::new(),
            focus: Focus::Page,
            help_visible: false,
            selected_contact: 0,
            status: None,
            geometry: StaticGeometry::default(),
            scroll_target: None,
            next_animation_frame: None,
        }
    }

    /// Content being shown.
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Page geometry as last measured.
    pub fn geometry(&self) -> &StaticGeometry {
        &self.geometry
    }

    /// Section highlighted in navigation.
    pub fn active_section(&self) -> &SectionId {
        self.tracker.active_section()
    }

    /// Current scroll offset in rows.
    pub fn scroll_offset(&self) -> usize {
        self.geometry.scroll_y.max(0.0) as usize
    }

    /// Largest valid scroll offset for the current layout.
    pub fn max_scroll(&self) -> f64 {
        (self.geometry.document_height - self.geometry.viewport_height).max(0.0)
    }

    /// Whether a navigation scroll is still moving.
    pub fn is_animating(&self) -> bool {
        self.scroll_target.is_some()
    }

    /// Status message, if one has not expired.
    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }

    /// Show `text` in the status bar for a few seconds.
    pub fn set_status(&mut self, text: impl Into<String>, now: Instant) {
        self.status = Some(StatusMessage {
            text: text.into(),
            expires_at: now + STATUS_DURATION,
        });
    }

    /// Record a fresh layout.
    ///
    /// Notifies the tracker when anything moved; the scroll offset is
    /// clamped to the new document.
    pub fn set_layout(
        &mut self,
        viewport_height: usize,
        document_height: usize,
        extents: impl IntoIterator<Item = (SectionId, SectionExtent)>,
        now: Instant,
    ) {
        let mut next = StaticGeometry::new(viewport_height as f64, document_height as f64);
        next.extents = extents.into_iter().collect();
        next.scroll_y = self.geometry.scroll_y;

        if next == self.geometry {
            return;
        }
        self.geometry = next;
        self.geometry.scroll_y = self.geometry.scroll_y.clamp(0.0, self.max_scroll());
        if let Some(target) = self.scroll_target {
            self.scroll_target = Some(target.clamp(0.0, self.max_scroll()));
        }
        debug!(viewport_height, document_height, "layout changed");
        self.tracker.on_layout_change(now, &self.geometry);
    }

    /// User-initiated scroll to `offset`. Cancels any running animation.
    pub fn scroll_to(&mut self, offset: f64, now: Instant) {
        self.scroll_target = None;
        self.next_animation_frame = None;
        self.move_to(offset, now);
    }

    /// User-initiated scroll by `delta` rows.
    pub fn scroll_by(&mut self, delta: f64, now: Instant) {
        self.scroll_to(self.geometry.scroll_y + delta, now);
    }

    /// Programmatic scroll to the top of the page.
    pub fn navigate_to_top(&mut self, now: Instant) {
        let target = self.tracker.scroll_to_top(now);
        self.animate_to(target, now);
    }

    /// Programmatic scroll to a section.
    ///
    /// Returns `Ok(false)` when the section has not been laid out yet.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::UnknownSection` for an unregistered id.
    pub fn navigate_to(&mut self, id: &SectionId, now: Instant) -> Result<bool, TrackerError> {
        match self.tracker.scroll_to_section(id, now, &self.geometry)? {
            Some(target) => {
                self.animate_to(target, now);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Advance animation and timers to `now`.
    ///
    /// Order matters: due timers fire first, then an animation step, then
    /// the pending frame recomputation. Returns true if a redraw is needed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut dirty = self.tracker.tick(now, &self.geometry);

        if let (Some(target), Some(due)) = (self.scroll_target, self.next_animation_frame) {
            if due <= now {
                let next = step_toward(self.geometry.scroll_y, target);
                self.move_to(next, now);
                if next == target {
                    self.scroll_target = None;
                    self.next_animation_frame = None;
                } else {
                    self.next_animation_frame = Some(now + ANIMATION_FRAME);
                }
                dirty = true;
            }
        }

        dirty |= self.tracker.on_frame(&self.geometry);

        if self.status.as_ref().is_some_and(|s| s.expires_at <= now) {
            self.status = None;
            dirty = true;
        }
        dirty
    }

    /// Earliest instant at which [`AppState::advance`] has work to do.
    pub fn next_wakeup(&self) -> Option<Instant> {
        [
            self.tracker.next_deadline(),
            self.next_animation_frame,
            self.status.as_ref().map(|s| s.expires_at),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    fn animate_to(&mut self, target: f64, now: Instant) {
        let target = target.clamp(0.0, self.max_scroll());
        if target == self.geometry.scroll_y {
            self.scroll_target = None;
            self.next_animation_frame = None;
            return;
        }
        self.scroll_target = Some(target);
        self.next_animation_frame = Some(now);
    }

    fn move_to(&mut self, offset: f64, now: Instant) {
        let offset = offset.clamp(0.0, self.max_scroll()).round();
        if offset == self.geometry.scroll_y {
            return;
        }
        self.geometry.scroll_y = offset;
        self.tracker.on_scroll(now, &self.geometry);
    }
}

/// Ease toward `target`: a third of the remaining distance, at least one row.
fn step_toward(current: f64, target: f64) -> f64 {
    let remaining = target - current;
    if remaining.abs() <= 1.0 {
        return target;
    }
    let step = (remaining.abs() / 3.0).ceil().max(1.0);
    current + step * remaining.signum()
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
