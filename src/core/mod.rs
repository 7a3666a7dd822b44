//! # Core Application Logic
//!
//! Navigation and effect sequencing for the portfolio.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • NavigationState      │
//!                    │  • Action / Effect      │
//!                    │  • update() (reducer)   │
//!                    │  • Effects + Scheduler  │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`section`]: The fixed set of sections, their titles and quotes
//! - [`state`]: `NavigationState`, the one piece of owned navigation state
//! - [`action`]: `Action`, `Effect` and the `update()` reducer
//! - [`effects`]: Flash overlays, quote popup, title glitch, entrance animation
//! - [`timer`]: Deferred task queue the effects are sequenced on
//! - [`profile`]: Static page content
//! - [`config`]: Settings file and override resolution

pub mod action;
pub mod config;
pub mod effects;
pub mod profile;
pub mod section;
pub mod state;
pub mod timer;
