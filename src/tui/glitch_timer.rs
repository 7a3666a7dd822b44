//! # Glitch Timer
//!
//! Background task that fires `Action::Glitch` on a fixed interval. The
//! task only sends into the event loop's channel; the loop owns all state.
//!
//! The timer runs until [`GlitchTimer::stop`] is called or the handle is
//! dropped.

use std::sync::mpsc;
use std::time::Duration;

use log::{info, warn};
use tokio::task::AbortHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use crate::core::action::Action;

pub struct GlitchTimer {
    handle: AbortHandle,
}

impl GlitchTimer {
    /// Spawn the timer. The first glitch fires one full `period` after start.
    pub fn start(period: Duration, tx: mpsc::Sender<Action>) -> Self {
        info!("Starting glitch timer (every {:?})", period);
        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                if tx.send(Action::Glitch).is_err() {
                    warn!("Glitch timer stopping: receiver dropped");
                    return;
                }
            }
        });
        Self {
            handle: task.abort_handle(),
        }
    }

    pub fn stop(&self) {
        if !self.handle.is_finished() {
            info!("Stopping glitch timer");
        }
        self.handle.abort();
    }
}

impl Drop for GlitchTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
