//! # Cosmetic Effects
//!
//! Screen flashes, the quote popup, the title glitch and entrance
//! animations. These are pure decoration: nothing here reads or writes
//! `NavigationState`.
//!
//! Every "wait" is a deferred task on the [`Scheduler`]. The event loop
//! calls [`Effects::tick`] with the current session time and renders
//! whatever is live.
//!
//! ```text
//! flash:   t0 ── 50ms ──▶ fade starts ── duration ──▶ removed
//! quote:   t0 ── display ──────────────────────────▶ removed
//! glitch:  t0 ── 200ms ──▶ title restored
//! ```
//!
//! In-flight effects are never cancelled. Switching quickly stacks flash
//! overlays; each one fades out on its own schedule.

use std::time::Duration;

use log::{debug, info};
use rand::Rng;

use crate::core::action::Effect;
use crate::core::profile::{self, Rgb};
use crate::core::section::Section;
use crate::core::timer::Scheduler;

pub const FLASH_OPACITY: f32 = 0.1;
pub const FLASH_FADE_DELAY: Duration = Duration::from_millis(50);
pub const QUOTE_TRANSITION: Duration = Duration::from_millis(500);
pub const GLITCH_RESTORE: Duration = Duration::from_millis(200);
pub const ENTRANCE_FADE: Duration = Duration::from_millis(500);
pub const STAT_STAGGER: Duration = Duration::from_millis(200);
pub const STAT_FILL: Duration = Duration::from_millis(1500);

/// Symbols a glitched character can turn into.
pub const GLITCH_ALPHABET: &str = "!@#$%^&*(){}[]|\\:\";'<>?,./~`";

/// Corrupt each non-space character of `source` with probability `p`.
///
/// `p` is clamped to `0.0..=1.0`; `p == 0.0` always returns `source`.
pub fn glitch_text<R: Rng + ?Sized>(source: &str, p: f64, rng: &mut R) -> String {
    let p = p.clamp(0.0, 1.0);
    let symbols = GLITCH_ALPHABET.as_bytes();
    source
        .chars()
        .map(|c| {
            if c != ' ' && rng.random::<f64>() < p {
                symbols[rng.random_range(0..symbols.len())] as char
            } else {
                c
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectTimings {
    pub select_flash: Duration,
    pub startup_flash: Duration,
    pub quote_display: Duration,
    pub glitch_probability: f64,
}

impl Default for EffectTimings {
    fn default() -> Self {
        Self {
            select_flash: Duration::from_millis(100),
            startup_flash: Duration::from_millis(200),
            quote_display: Duration::from_millis(3000),
            glitch_probability: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlashOverlay {
    id: u64,
    pub color: Rgb,
    pub duration: Duration,
    fade_started: Option<Duration>,
}

impl FlashOverlay {
    /// Current opacity: constant until the fade starts, then linear to zero.
    pub fn opacity(&self, now: Duration) -> f32 {
        match self.fade_started {
            None => FLASH_OPACITY,
            Some(start) => {
                if self.duration.is_zero() {
                    return 0.0;
                }
                let t = now.saturating_sub(start).as_secs_f32() / self.duration.as_secs_f32();
                FLASH_OPACITY * (1.0 - t.min(1.0))
            }
        }
    }

    pub fn is_fading(&self) -> bool {
        self.fade_started.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuotePopup {
    id: u64,
    pub text: String,
    pub created_at: Duration,
    pub dismiss_at: Duration,
}

impl QuotePopup {
    /// 0.0 → 1.0 over the appear transition.
    pub fn appear_progress(&self, now: Duration) -> f32 {
        progress(now.saturating_sub(self.created_at), QUOTE_TRANSITION)
    }

    /// True during the closing transition right before removal.
    pub fn is_exiting(&self, now: Duration) -> bool {
        now + QUOTE_TRANSITION >= self.dismiss_at
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlitchTitle {
    id: u64,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    id: u64,
    pub section: Section,
    pub started_at: Duration,
}

impl Entrance {
    pub fn fade_progress(&self, now: Duration) -> f32 {
        progress(now.saturating_sub(self.started_at), ENTRANCE_FADE)
    }

    /// Eased fill (0.0 → 1.0) for the stat bar at `index`. Bars start one
    /// stagger step apart.
    pub fn stat_fill(&self, now: Duration, index: usize) -> f32 {
        let offset = STAT_STAGGER * index as u32;
        let t = progress(now.saturating_sub(self.started_at + offset), STAT_FILL);
        1.0 - (1.0 - t).powi(3)
    }

    fn total_duration(&self) -> Duration {
        let bars = profile::profile(self.section)
            .map(|p| p.stats.len())
            .unwrap_or(0);
        let stats = match bars {
            0 => Duration::ZERO,
            n => STAT_STAGGER * (n as u32 - 1) + STAT_FILL,
        };
        stats.max(ENTRANCE_FADE)
    }
}

fn progress(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    FadeFlash(u64),
    RemoveFlash(u64),
    RemoveQuote(u64),
    RestoreTitle(u64),
    EndEntrance(u64),
}

pub struct Effects {
    timings: EffectTimings,
    scheduler: Scheduler<Deferred>,
    overlays: Vec<FlashOverlay>,
    quote: Option<QuotePopup>,
    glitch: Option<GlitchTitle>,
    entrance: Option<Entrance>,
    next_id: u64,
}

impl Effects {
    pub fn new(timings: EffectTimings) -> Self {
        Self {
            timings,
            scheduler: Scheduler::new(),
            overlays: Vec::new(),
            quote: None,
            glitch: None,
            entrance: None,
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Play one effect emitted by `update()`. `title` is the current page
    /// title, used as the glitch source.
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        effect: Effect,
        title: &str,
        now: Duration,
        rng: &mut R,
    ) {
        match effect {
            Effect::StartupFlash => self.flash(Rgb::GREEN, self.timings.startup_flash, now),
            Effect::SelectFlash => self.flash(Rgb::YELLOW, self.timings.select_flash, now),
            Effect::AnimateEntrance(section) => self.animate_entrance(section, now),
            Effect::ShowQuote(text) => self.popup_quote(text, self.timings.quote_display, now),
            Effect::HoverCue(section) => debug!("*beep* ({})", section),
            Effect::Glitch => {
                let p = self.timings.glitch_probability;
                self.glitch(title, p, now, rng);
            }
        }
    }

    pub fn flash(&mut self, color: Rgb, duration: Duration, now: Duration) {
        let id = self.next_id();
        self.overlays.push(FlashOverlay {
            id,
            color,
            duration,
            fade_started: None,
        });
        self.scheduler
            .schedule(now, FLASH_FADE_DELAY, Deferred::FadeFlash(id));
    }

    /// Show `text`, replacing any popup already on screen.
    pub fn popup_quote(&mut self, text: &str, display: Duration, now: Duration) {
        if let Some(old) = self.quote.take() {
            debug!("Evicting quote popup {}", old.id);
        }
        let id = self.next_id();
        self.quote = Some(QuotePopup {
            id,
            text: text.to_string(),
            created_at: now,
            dismiss_at: now + display,
        });
        self.scheduler
            .schedule(now, display, Deferred::RemoveQuote(id));
        info!("{}", text);
    }

    /// Swap the title for a corrupted copy of `source` for a moment.
    pub fn glitch<R: Rng + ?Sized>(&mut self, source: &str, p: f64, now: Duration, rng: &mut R) {
        let id = self.next_id();
        self.glitch = Some(GlitchTitle {
            id,
            text: glitch_text(source, p, rng),
        });
        self.scheduler
            .schedule(now, GLITCH_RESTORE, Deferred::RestoreTitle(id));
        info!("GLITCH EFFECT ACTIVATED");
    }

    /// Restart the entrance animation for `section`.
    ///
    /// A glitch still on screen is a copy of the previous page's title, so
    /// it is dropped here; its pending restore task then matches nothing.
    pub fn animate_entrance(&mut self, section: Section, now: Duration) {
        self.glitch = None;
        let id = self.next_id();
        let entrance = Entrance {
            id,
            section,
            started_at: now,
        };
        self.scheduler
            .schedule(now, entrance.total_duration(), Deferred::EndEntrance(id));
        self.entrance = Some(entrance);
    }

    /// Run every deferred task that is due. Returns true if anything changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let due = self.scheduler.drain_due(now);
        let changed = !due.is_empty();
        for task in due {
            match task {
                Deferred::FadeFlash(id) => {
                    if let Some(overlay) = self.overlays.iter_mut().find(|o| o.id == id) {
                        overlay.fade_started = Some(now);
                        let duration = overlay.duration;
                        self.scheduler
                            .schedule(now, duration, Deferred::RemoveFlash(id));
                    }
                }
                Deferred::RemoveFlash(id) => self.overlays.retain(|o| o.id != id),
                Deferred::RemoveQuote(id) => {
                    if self.quote.as_ref().is_some_and(|q| q.id == id) {
                        self.quote = None;
                    }
                }
                Deferred::RestoreTitle(id) => {
                    if self.glitch.as_ref().is_some_and(|g| g.id == id) {
                        self.glitch = None;
                    }
                }
                Deferred::EndEntrance(id) => {
                    if self.entrance.is_some_and(|e| e.id == id) {
                        self.entrance = None;
                    }
                }
            }
        }
        changed
    }

    /// True while anything on screen is still moving.
    pub fn is_animating(&self) -> bool {
        !self.overlays.is_empty()
            || self.quote.is_some()
            || self.glitch.is_some()
            || self.entrance.is_some()
    }

    /// Session time of the next scheduled fade, removal or restore.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    pub fn overlays(&self) -> &[FlashOverlay] {
        &self.overlays
    }

    pub fn quote(&self) -> Option<&QuotePopup> {
        self.quote.as_ref()
    }

    pub fn glitch_title(&self) -> Option<&str> {
        self.glitch.as_ref().map(|g| g.text.as_str())
    }

    pub fn entrance(&self) -> Option<&Entrance> {
        self.entrance.as_ref()
    }
}

impl Default for Effects {
    fn default() -> Self {
        Self::new(EffectTimings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_glitch_text_zero_probability_is_identity() {
        assert_eq!(glitch_text("ABCDE", 0.0, &mut rng()), "ABCDE");
    }

    #[test]
    fn test_glitch_text_full_probability_keeps_spaces() {
        let out = glitch_text("TMNT RULES", 1.0, &mut rng());
        assert_eq!(out.chars().count(), 10);
        for (i, c) in out.chars().enumerate() {
            if i == 4 {
                assert_eq!(c, ' ');
            } else {
                assert!(GLITCH_ALPHABET.contains(c), "{c:?} not a glitch symbol");
            }
        }
    }

    #[test]
    fn test_glitch_text_is_deterministic_for_a_seed() {
        let a = glitch_text("HEROES IN A HALF SHELL", 0.5, &mut rng());
        let b = glitch_text("HEROES IN A HALF SHELL", 0.5, &mut rng());
        assert_eq!(a, b);
    }

    #[test]
    fn test_flash_fades_then_disappears() {
        let mut effects = Effects::default();
        effects.flash(Rgb::YELLOW, ms(100), ms(0));

        assert_eq!(effects.overlays().len(), 1);
        assert_eq!(effects.overlays()[0].opacity(ms(10)), FLASH_OPACITY);

        effects.tick(ms(50));
        let overlay = &effects.overlays()[0];
        assert!(overlay.is_fading());
        assert!(overlay.opacity(ms(100)) < FLASH_OPACITY);
        assert!(overlay.opacity(ms(100)) > 0.0);

        effects.tick(ms(149));
        assert_eq!(effects.overlays().len(), 1);
        effects.tick(ms(150));
        assert!(effects.overlays().is_empty());
        assert!(!effects.is_animating());
    }

    #[test]
    fn test_overlapping_flashes_are_independent() {
        let mut effects = Effects::default();
        effects.flash(Rgb::YELLOW, ms(100), ms(0));
        effects.flash(Rgb::YELLOW, ms(100), ms(20));
        assert_eq!(effects.overlays().len(), 2);

        effects.tick(ms(50));
        effects.tick(ms(150));
        assert_eq!(effects.overlays().len(), 1);

        effects.tick(ms(170));
        effects.tick(ms(270));
        assert!(effects.overlays().is_empty());
    }

    #[test]
    fn test_quote_removed_after_display_time() {
        let mut effects = Effects::default();
        let text = "I never back down from a fight, especially when my family is involved!";
        effects.apply(Effect::ShowQuote(text), "", ms(1000), &mut rng());

        let quote = effects.quote().unwrap();
        assert_eq!(quote.text, text);
        assert_eq!(quote.dismiss_at, ms(4000));

        effects.tick(ms(3999));
        assert!(effects.quote().is_some());
        effects.tick(ms(4000));
        assert!(effects.quote().is_none());
    }

    #[test]
    fn test_new_quote_evicts_old_one() {
        let mut effects = Effects::default();
        effects.popup_quote("first", ms(3000), ms(0));
        effects.popup_quote("second", ms(3000), ms(2000));

        assert_eq!(effects.quote().unwrap().text, "second");

        // The first popup's removal must not take down the second.
        effects.tick(ms(3000));
        assert_eq!(effects.quote().unwrap().text, "second");
        effects.tick(ms(5000));
        assert!(effects.quote().is_none());
    }

    #[test]
    fn test_quote_exiting_window() {
        let mut effects = Effects::default();
        effects.popup_quote("hi", ms(3000), ms(0));
        let quote = effects.quote().unwrap();
        assert!(!quote.is_exiting(ms(2000)));
        assert!(quote.is_exiting(ms(2600)));
        assert_eq!(quote.appear_progress(ms(250)), 0.5);
    }

    #[test]
    fn test_glitch_restores_title() {
        let mut effects = Effects::default();
        effects.glitch("TMNT", 1.0, ms(0), &mut rng());
        let glitched = effects.glitch_title().unwrap().to_string();
        assert_ne!(glitched, "TMNT");

        effects.tick(ms(199));
        assert!(effects.glitch_title().is_some());
        effects.tick(ms(200));
        assert!(effects.glitch_title().is_none());
    }

    #[test]
    fn test_entrance_drops_glitch_of_previous_title() {
        let mut effects = Effects::default();
        effects.glitch("TMNT Portfolio - Leonardo", 1.0, ms(0), &mut rng());
        assert!(effects.glitch_title().is_some());

        effects.animate_entrance(Section::Raphael, ms(10));
        assert!(effects.glitch_title().is_none());

        // A glitch started after the switch still restores on time.
        effects.glitch("TMNT Portfolio - Raphael", 1.0, ms(50), &mut rng());
        effects.tick(ms(200));
        assert!(effects.glitch_title().is_some());
        effects.tick(ms(250));
        assert!(effects.glitch_title().is_none());
    }

    #[test]
    fn test_entrance_restarts_on_repeat_switch() {
        let mut effects = Effects::default();
        effects.animate_entrance(Section::Raphael, ms(0));
        effects.animate_entrance(Section::Raphael, ms(300));

        let entrance = effects.entrance().unwrap();
        assert_eq!(entrance.started_at, ms(300));
        assert_eq!(entrance.fade_progress(ms(550)), 0.5);

        // The first run's end task must not clear the restarted one.
        let first_end = STAT_STAGGER * 3 + STAT_FILL;
        effects.tick(first_end);
        assert!(effects.entrance().is_some());
        effects.tick(first_end + ms(300));
        assert!(effects.entrance().is_none());
    }

    #[test]
    fn test_stat_bars_are_staggered() {
        let entrance = Entrance {
            id: 0,
            section: Section::Leonardo,
            started_at: ms(0),
        };
        assert_eq!(entrance.stat_fill(ms(0), 0), 0.0);
        assert!(entrance.stat_fill(ms(200), 0) > 0.0);
        assert_eq!(entrance.stat_fill(ms(200), 1), 0.0);
        assert_eq!(entrance.stat_fill(ms(1500), 0), 1.0);
        assert_eq!(entrance.stat_fill(ms(2100), 3), 1.0);
    }

    #[test]
    fn test_landing_entrance_lasts_one_fade() {
        let mut effects = Effects::default();
        effects.animate_entrance(Section::Landing, ms(0));
        effects.tick(ENTRANCE_FADE);
        assert!(effects.entrance().is_none());
    }

    #[test]
    fn test_apply_uses_configured_timings() {
        let timings = EffectTimings {
            select_flash: ms(40),
            ..EffectTimings::default()
        };
        let mut effects = Effects::new(timings);
        effects.apply(Effect::SelectFlash, "", ms(0), &mut rng());
        let overlay = &effects.overlays()[0];
        assert_eq!(overlay.color, Rgb::YELLOW);
        assert_eq!(overlay.duration, ms(40));

        effects.apply(Effect::StartupFlash, "", ms(0), &mut rng());
        assert_eq!(effects.overlays()[1].color, Rgb::GREEN);
        assert_eq!(effects.overlays()[1].duration, ms(200));
    }

    #[test]
    fn test_hover_cue_leaves_nothing_on_screen() {
        let mut effects = Effects::default();
        effects.apply(Effect::HoverCue(Section::Leonardo), "", ms(0), &mut rng());
        assert!(!effects.is_animating());
        assert!(effects.next_deadline().is_none());
    }
}
