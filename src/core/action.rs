//! # Actions
//!
//! Everything that can happen in the portfolio becomes an `Action`.
//! User presses →? That's `Action::Advance(Direction::Next)`.
//! Glitch timer fires? That's `Action::Glitch`.
//!
//! `update()` mutates the navigation state and returns the cosmetic
//! `Effect`s the adapter should play. No I/O here; the adapter decides how a
//! flash or a quote looks.
//!
//! ```text
//! State + Action  →  update()  →  New State + Vec<Effect>
//! ```
//!
//! Invalid section ids are ignored: no state change, no effects.

use log::{debug, info};

use crate::core::section::Section;
use crate::core::state::NavigationState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// UI came up.
    Startup,
    /// Click on a navigation button carrying a section id.
    SwitchTo(String),
    /// Pointer entered a navigation button.
    Hover(String),
    Advance(Direction),
    SelectCurrent,
    Reset,
    /// Periodic title glitch.
    Glitch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartupFlash,
    SelectFlash,
    AnimateEntrance(Section),
    ShowQuote(&'static str),
    HoverCue(Section),
    Glitch,
}

pub fn update(state: &mut NavigationState, action: Action) -> Vec<Effect> {
    debug!("update: {:?}", action);
    match action {
        Action::Startup => {
            info!("*KONAMI STARTUP SOUND*");
            vec![Effect::StartupFlash]
        }
        Action::SwitchTo(id) => switch_to(state, &id),
        Action::Hover(id) => match state.resolve(&id) {
            Ok(index) => state
                .section_at(index)
                .map(Effect::HoverCue)
                .into_iter()
                .collect(),
            Err(e) => {
                debug!("Hover ignored: {}", e);
                Vec::new()
            }
        },
        Action::Advance(direction) => advance(state, direction),
        Action::SelectCurrent => select_current(state),
        Action::Reset => reset(state),
        Action::Glitch => vec![Effect::Glitch],
    }
}

/// Activate `id`. Unknown ids leave the state untouched.
///
/// Switching to the section that is already active still replays the
/// entrance animation and flash.
pub fn switch_to(state: &mut NavigationState, id: &str) -> Vec<Effect> {
    let index = match state.resolve(id) {
        Ok(index) => index,
        Err(e) => {
            info!("Switch ignored: {}", e);
            return Vec::new();
        }
    };
    state.activate(index);
    let section = state.current();
    info!("*SELECT SOUND*");
    info!("Switched to {}", section.id().to_uppercase());
    vec![Effect::SelectFlash, Effect::AnimateEntrance(section)]
}

/// Step one section left or right, clamped to the ends of the order.
pub fn advance(state: &mut NavigationState, direction: Direction) -> Vec<Effect> {
    let index = match direction {
        Direction::Previous => state.current_index().saturating_sub(1),
        Direction::Next => (state.current_index() + 1).min(state.last_index()),
    };
    match state.section_at(index) {
        Some(section) => switch_to(state, section.id()),
        None => Vec::new(),
    }
}

pub fn select_current(state: &NavigationState) -> Vec<Effect> {
    vec![Effect::ShowQuote(state.current().quote())]
}

pub fn reset(state: &mut NavigationState) -> Vec<Effect> {
    switch_to(state, Section::Landing.id())
}
