//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod form_view;
mod help;
pub mod layout;
mod nav;
pub mod page;
mod sections;
mod styles;

pub use help::render_help_overlay;
pub use layout::{calculate_areas, ScreenAreas};
pub use page::{wrap_text, PageLayout};
pub use styles::{ColorConfig, PageStyles};

use crate::capability::{Capabilities, SystemCapabilities};
use crate::config::keybindings::KeyBindings;
use crate::config::ResolvedConfig;
use crate::form::{SubmitStatus, SubmitWorker, TransportError, Web3FormsTransport};
use crate::model::{AppError, KeyAction, Portfolio, SectionRegistry};
use crate::state::{
    begin_form_editing, focus_first_invalid, handle_contact_action, handle_form_key,
    handle_scroll_action, AppState, Focus,
};
use chrono::Datelike;
use constants::{IDLE_POLL_INTERVAL, MOUSE_SCROLL_ROWS, SUBMIT_POLL_INTERVAL};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// The form transport could not be built
    #[error("Form transport error: {0}")]
    Transport(#[from] TransportError),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: PageStyles,
    worker: SubmitWorker,
    capabilities: Box<dyn Capabilities>,
    /// Year shown in the copyright footer.
    copyright_year: i32,
    /// Section to bring into view once the first layout is measured.
    start_section: Option<String>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        app_state: AppState,
        worker: SubmitWorker,
        styles: PageStyles,
        start_section: Option<String>,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles,
            worker,
            capabilities: Box::new(SystemCapabilities::new()),
            copyright_year: chrono::Local::now().year(),
            start_section,
        })
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Sleeps until the next input
    /// event or the earliest pending timer, whichever comes first.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let start = Instant::now();
        self.draw(start)?;
        self.apply_start_section(start);

        loop {
            let now = Instant::now();
            let mut dirty = self.worker.poll(&mut self.app_state.form);
            dirty |= self.app_state.advance(now);
            if dirty {
                self.draw(now)?;
            }

            if !event::poll(self.poll_timeout(now))? {
                continue;
            }
            let now = Instant::now();
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if self.handle_key(key, now) {
                        return Ok(());
                    }
                    self.app_state.advance(now);
                    self.draw(now)?;
                }
                Event::Mouse(mouse) => {
                    if self.handle_mouse(mouse, now) {
                        self.app_state.advance(now);
                        self.draw(now)?;
                    }
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "terminal resized");
                    self.draw(now)?;
                }
                _ => {}
            }
        }
    }

    /// Detach the tracker so no timer fires after the page is gone.
    pub fn shutdown(&mut self) {
        self.app_state.tracker.teardown();
    }

    /// How long the loop may block waiting for input.
    fn poll_timeout(&self, now: Instant) -> Duration {
        if self.app_state.tracker.frame_pending() {
            return Duration::ZERO;
        }
        let cap = if self.app_state.form.status() == SubmitStatus::Sending {
            SUBMIT_POLL_INTERVAL
        } else {
            IDLE_POLL_INTERVAL
        };
        self.app_state
            .next_wakeup()
            .map_or(cap, |at| at.saturating_duration_since(now).min(cap))
    }

    fn apply_start_section(&mut self, now: Instant) {
        let Some(name) = self.start_section.take() else {
            return;
        };
        let Some(id) = self.app_state.tracker.sections().find(&name).map(|s| s.id().clone())
        else {
            warn!(section = %name, "unknown start section, staying at the top");
            return;
        };
        if let Err(e) = self.app_state.navigate_to(&id, now) {
            warn!(error = %e, "start section navigation failed");
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Ctrl+C always quits, even while editing the form
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.help_visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.app_state.help_visible = false;
            }
            return false;
        }

        if let Focus::Form(_) = self.app_state.focus {
            if handle_form_key(&mut self.app_state, key) {
                self.submit_form();
            }
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.help_visible = true,
            KeyAction::EditForm => begin_form_editing(&mut self.app_state, now),
            KeyAction::CopyContact
            | KeyAction::ShareContact
            | KeyAction::NextContact
            | KeyAction::PrevContact => handle_contact_action(
                &mut self.app_state,
                action,
                self.capabilities.as_mut(),
                now,
            ),
            _ => handle_scroll_action(&mut self.app_state, action, now),
        }
        false
    }

    /// Wheel scrolling over the page. Returns true if the page moved.
    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> bool {
        if self.app_state.help_visible {
            return false;
        }
        let delta = match mouse.kind {
            MouseEventKind::ScrollDown => MOUSE_SCROLL_ROWS,
            MouseEventKind::ScrollUp => -MOUSE_SCROLL_ROWS,
            _ => return false,
        };
        self.app_state.scroll_by(delta, now);
        true
    }

    fn submit_form(&mut self) {
        if self.worker.submit(&mut self.app_state.form) {
            info!("contact form dispatched");
        } else if self.app_state.form.status() != SubmitStatus::Sending {
            focus_first_invalid(&mut self.app_state);
        }
    }

    /// Lay out the page at the current terminal size and render it.
    fn draw(&mut self, now: Instant) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let areas = calculate_areas(Rect::new(0, 0, size.width, size.height));
        let page = PageLayout::build(
            &self.app_state,
            areas.page.width,
            &self.styles,
            self.copyright_year,
        );
        self.app_state.set_layout(
            areas.viewport_height(),
            page.height(),
            page.extents().iter().cloned(),
            now,
        );

        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, &page, &areas, styles);
            if state.help_visible {
                render_help_overlay(frame, styles);
            }
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without touching the real terminal.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        worker: SubmitWorker,
        capabilities: Box<dyn Capabilities>,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles: PageStyles::with_color_config(ColorConfig::from_env_and_args(true)),
            worker,
            capabilities,
            copyright_year: 2026,
            start_section: None,
        }
    }
}

/// Initialize and run the TUI application
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(config: &ResolvedConfig, portfolio: Portfolio) -> Result<(), TuiError> {
    let transport = Web3FormsTransport::new(config.endpoint.clone())?;
    let worker = SubmitWorker::spawn(Arc::new(transport))?;
    let app_state = AppState::new(portfolio, SectionRegistry::portfolio(), config.tracker.clone());
    let styles = PageStyles::with_color_config(ColorConfig::from_env_and_args(!config.color));

    let mut app = match TuiApp::new(app_state, worker, styles, config.start_section.clone()) {
        Ok(app) => app,
        Err(e) => {
            // Raw mode may already be on
            let _ = restore_terminal();
            return Err(e);
        }
    };

    // Run the app and ensure cleanup happens even on error
    let result = app.run();
    app.shutdown();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
