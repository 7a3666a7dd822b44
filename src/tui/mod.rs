//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (landing sprites, flash, quote, glitch, entrance): draws
//!   every ~50ms.
//! - **Idle** (profile page, nothing moving): sleeps up to 500ms, only
//!   redraws on events, resize, due timers or glitch ticks.

mod component;
mod components;
pub mod event;
pub mod glitch_timer;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use rand::Rng;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::action::{Action, Direction, update};
use crate::core::config::ResolvedConfig;
use crate::core::effects::{EffectTimings, Effects};
use crate::core::section::Section;
use crate::core::state::NavigationState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::glitch_timer::GlitchTimer;

const ANIMATING_POLL: Duration = Duration::from_millis(50);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core navigation state)
pub struct TuiState {
    /// Nav button under the mouse pointer.
    pub hovered: Option<Section>,
}

impl TuiState {
    pub fn new() -> Self {
        Self { hovered: None }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the event loop owns: navigation state, the effect runtime,
/// presentation state and the glitch random source.
pub struct Portfolio<R: Rng> {
    pub nav: NavigationState,
    pub effects: Effects,
    pub tui: TuiState,
    rng: R,
}

impl<R: Rng> Portfolio<R> {
    pub fn new(timings: EffectTimings, rng: R) -> Self {
        Self {
            nav: NavigationState::new(),
            effects: Effects::new(timings),
            tui: TuiState::new(),
            rng,
        }
    }

    /// Run an action through the reducer and play its effects.
    pub fn dispatch(&mut self, action: Action, now: Duration) {
        for effect in update(&mut self.nav, action) {
            self.effects
                .apply(effect, self.nav.title(), now, &mut self.rng);
        }
    }

    /// Handle one input event. Returns true when the user asked to quit.
    pub fn handle_event(&mut self, event: TuiEvent, frame_area: Rect, now: Duration) -> bool {
        match event {
            TuiEvent::Quit => return true,
            TuiEvent::Resize => {}
            TuiEvent::Previous => self.dispatch(Action::Advance(Direction::Previous), now),
            TuiEvent::Next => self.dispatch(Action::Advance(Direction::Next), now),
            TuiEvent::Select => self.dispatch(Action::SelectCurrent, now),
            TuiEvent::Reset => self.dispatch(Action::Reset, now),
            TuiEvent::Jump(index) => {
                if let Some(section) = self.nav.section_at(index) {
                    self.dispatch(Action::SwitchTo(section.id().to_string()), now);
                }
            }
            TuiEvent::MouseClick(column, row) => {
                if let Some(section) = ui::hit_test_nav(frame_area, column, row) {
                    self.dispatch(Action::SwitchTo(section.id().to_string()), now);
                }
            }
            TuiEvent::MouseMove(column, row) => {
                let hovered = ui::hit_test_nav(frame_area, column, row);
                // Only entering a button counts
                if hovered != self.tui.hovered {
                    self.tui.hovered = hovered;
                    if let Some(section) = hovered {
                        self.dispatch(Action::Hover(section.id().to_string()), now);
                    }
                }
            }
        }
        false
    }

    /// Landing sprites bob continuously; everything else only while an
    /// effect is live.
    pub fn is_animating(&self) -> bool {
        self.nav.current() == Section::Landing || self.effects.is_animating()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig, started: Instant) -> std::io::Result<()> {
    let mut app = Portfolio::new(config.timings, rand::rng());

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();
    if let Err(ref e) = terminal_mode_guard {
        warn!("Failed to enable mouse capture: {}", e);
    }

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let glitch_timer = config
        .glitch_enabled
        .then(|| GlitchTimer::start(config.glitch_interval, tx));

    let result = event_loop(&mut terminal, &mut app, &rx, started);

    if let Some(timer) = glitch_timer {
        timer.stop();
    }
    drop(terminal_mode_guard);
    ratatui::restore();
    info!("halfshell shutting down");
    result
}

fn poll_timeout(animating: bool, next_deadline: Option<Duration>, now: Duration) -> Duration {
    let base = if animating { ANIMATING_POLL } else { IDLE_POLL };
    match next_deadline {
        Some(deadline) => base.min(deadline.saturating_sub(now)),
        None => base,
    }
}

fn event_loop<R: Rng>(
    terminal: &mut DefaultTerminal,
    app: &mut Portfolio<R>,
    rx: &mpsc::Receiver<Action>,
    started: Instant,
) -> std::io::Result<()> {
    let start_time = Instant::now();
    app.dispatch(Action::Startup, Duration::ZERO);

    let mut needs_redraw = true; // Force first frame
    let mut first_frame = true;

    loop {
        let now = start_time.elapsed();
        if app.effects.tick(now) {
            needs_redraw = true;
        }

        let animating = app.is_animating();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app.nav, &app.effects, &app.tui, now))?;
            needs_redraw = false;
            if first_frame {
                info!("Loaded in {}ms - Cowabunga!", started.elapsed().as_millis());
                first_frame = false;
            }
        }

        // Dynamic poll timeout: short when animating (~20fps), long when idle,
        // never past the next deferred effect task
        let timeout = poll_timeout(animating, app.effects.next_deadline(), start_time.elapsed());

        // Process first event + drain ALL pending events before next draw
        let mut pending = poll_event_timeout(timeout)?;
        if pending.is_some() {
            needs_redraw = true;
        }
        while let Some(event) = pending {
            let frame_area = terminal.get_frame().area();
            if app.handle_event(event, frame_area, start_time.elapsed()) {
                return Ok(());
            }
            pending = poll_event_immediate()?;
        }

        // Handle background task actions (glitch ticks)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            app.dispatch(action, start_time.elapsed());
        }
    }
}
