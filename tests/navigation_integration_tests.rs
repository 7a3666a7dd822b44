use std::time::Duration;

use halfshell::core::action::{Action, Direction, Effect, update};
use halfshell::core::effects::{EffectTimings, Effects, glitch_text};
use halfshell::core::section::{ORDER, Section, page_title};
use halfshell::core::state::NavigationState;
use rand::SeedableRng;
use rand::rngs::StdRng;

// ============================================================================
// Helper Functions
// ============================================================================

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Drives the reducer and the effect runtime together, the way the event
/// loop does.
struct Harness {
    nav: NavigationState,
    effects: Effects,
    rng: StdRng,
}

impl Harness {
    fn new() -> Self {
        Self {
            nav: NavigationState::new(),
            effects: Effects::new(EffectTimings::default()),
            rng: StdRng::seed_from_u64(42),
        }
    }

    fn send(&mut self, action: Action, now: Duration) -> Vec<Effect> {
        let effects = update(&mut self.nav, action);
        for effect in effects.clone() {
            self.effects
                .apply(effect, self.nav.title(), now, &mut self.rng);
        }
        effects
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_switch_to_raphael_then_quote() {
    let mut h = Harness::new();

    h.send(Action::SwitchTo("raphael".to_string()), ms(0));
    assert_eq!(h.nav.current(), Section::Raphael);
    assert_eq!(h.nav.current_index(), 3);
    assert_eq!(h.nav.title(), "TMNT Portfolio - Raphael");

    h.send(Action::SelectCurrent, ms(1000));
    assert_eq!(
        h.effects.quote().map(|q| q.text.as_str()),
        Some("I never back down from a fight, especially when my family is involved!")
    );

    h.effects.tick(ms(3999));
    assert!(h.effects.quote().is_some());
    h.effects.tick(ms(4000));
    assert!(h.effects.quote().is_none());
}

#[test]
fn test_single_active_section_across_random_walk() {
    let mut h = Harness::new();
    let actions = [
        Action::Advance(Direction::Next),
        Action::SwitchTo("michelangelo".to_string()),
        Action::Advance(Direction::Next),
        Action::SwitchTo("casey".to_string()),
        Action::Advance(Direction::Previous),
        Action::Reset,
        Action::Advance(Direction::Previous),
        Action::SelectCurrent,
        Action::Hover("leonardo".to_string()),
        Action::Glitch,
    ];
    for (i, action) in actions.into_iter().enumerate() {
        h.send(action, ms(i as u64 * 10));
        assert_eq!(h.nav.active_count(), 1);
        assert!(h.nav.is_active(h.nav.current()));
    }
    assert_eq!(h.nav.current(), Section::Landing);
}

#[test]
fn test_invalid_target_is_silent() {
    let mut h = Harness::new();
    h.send(Action::SwitchTo("leonardo".to_string()), ms(0));
    let before = h.nav.clone();

    let effects = h.send(Action::SwitchTo("LEONARDO".to_string()), ms(10));

    assert!(effects.is_empty());
    assert_eq!(h.nav, before);
}

#[test]
fn test_boundaries_still_replay_effects() {
    let mut h = Harness::new();
    let effects = h.send(Action::Advance(Direction::Previous), ms(0));
    assert_eq!(h.nav.current_index(), 0);
    assert!(effects.contains(&Effect::SelectFlash));
    assert_eq!(h.effects.overlays().len(), 1);

    for _ in 0..10 {
        h.send(Action::Advance(Direction::Next), ms(0));
    }
    assert_eq!(h.nav.current_index(), ORDER.len() - 1);
    assert_eq!(h.nav.current(), Section::Michelangelo);
    // Flashes stack; nothing cancels them
    assert_eq!(h.effects.overlays().len(), 11);
}

#[test]
fn test_reset_from_every_section() {
    for section in ORDER {
        let mut h = Harness::new();
        h.send(Action::SwitchTo(section.id().to_string()), ms(0));
        h.send(Action::Reset, ms(5));
        assert_eq!(h.nav.current(), Section::Landing);
        assert_eq!(h.nav.current_index(), 0);
    }
}

#[test]
fn test_effects_never_touch_navigation() {
    let mut h = Harness::new();
    h.send(Action::SwitchTo("donatello".to_string()), ms(0));
    let before = h.nav.clone();

    h.send(Action::SelectCurrent, ms(10));
    h.send(Action::Glitch, ms(20));
    h.send(Action::Startup, ms(30));
    h.send(Action::Hover("raphael".to_string()), ms(40));
    for t in (0..6000).step_by(100) {
        h.effects.tick(ms(t));
    }

    assert_eq!(h.nav, before);
    assert!(!h.effects.is_animating());
}

#[test]
fn test_switch_after_glitch_shows_new_title() {
    let mut h = Harness::new();
    h.effects = Effects::new(EffectTimings {
        glitch_probability: 1.0,
        ..EffectTimings::default()
    });
    h.send(Action::Glitch, ms(0));
    assert!(h.effects.glitch_title().is_some());

    h.send(Action::SwitchTo("raphael".to_string()), ms(10));
    assert_eq!(h.nav.title(), "TMNT Portfolio - Raphael");
    assert_eq!(h.effects.glitch_title(), None);

    // The old glitch's restore is stale and must not touch a fresh one
    h.send(Action::Glitch, ms(100));
    h.effects.tick(ms(200));
    assert!(h.effects.glitch_title().is_some());
    h.effects.tick(ms(300));
    assert_eq!(h.effects.glitch_title(), None);
}

#[test]
fn test_page_titles() {
    assert_eq!(page_title("leonardo"), "TMNT Portfolio - Leonardo");
    assert_eq!(page_title("donatello"), "TMNT Portfolio - Donatello");
    assert_eq!(page_title("raphael"), "TMNT Portfolio - Raphael");
    assert_eq!(page_title("michelangelo"), "TMNT Portfolio - Michelangelo");
    assert_eq!(
        page_title("landing"),
        "TMNT Portfolio - Teenage Mutant Ninja Turtles"
    );
    assert_eq!(
        page_title("april"),
        "TMNT Portfolio - Teenage Mutant Ninja Turtles"
    );
}

#[test]
fn test_glitch_zero_probability() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(glitch_text("ABCDE", 0.0, &mut rng), "ABCDE");
}
