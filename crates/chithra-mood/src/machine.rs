//! Mood state machine
//!
//! Owns the current mood and the anger timer. Exactly one mood is active;
//! there is no terminal state.

use tracing::debug;

use chithra_core::{Mood, Timestamp};

use crate::{evaluate, MoodConfig, MoodContext, MoodInput, RuleKind};

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodStep {
    pub previous: Mood,
    pub mood: Mood,
    /// Rule that decided this tick
    pub rule: RuleKind,
    /// Caller must clear its click burst
    pub reset_click_burst: bool,
}

impl MoodStep {
    pub fn changed(&self) -> bool {
        self.previous != self.mood
    }
}

/// Mood machine
#[derive(Debug, Clone)]
pub struct MoodMachine {
    config: MoodConfig,
    mood: Mood,
    angry_entered_at: Timestamp,
}

impl MoodMachine {
    /// Start Content
    pub fn new(config: MoodConfig) -> Self {
        Self::with_mood(config, Mood::default(), Timestamp::ZERO)
    }

    /// Start in a given mood, as if entered at `since`
    pub fn with_mood(config: MoodConfig, mood: Mood, since: Timestamp) -> Self {
        Self {
            config,
            mood,
            angry_entered_at: since,
        }
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn angry_entered_at(&self) -> Timestamp {
        self.angry_entered_at
    }

    pub fn config(&self) -> &MoodConfig {
        &self.config
    }

    /// Advance one tick
    pub fn step(&mut self, input: &MoodInput) -> MoodStep {
        let ctx = MoodContext {
            mood: self.mood,
            angry_entered_at: self.angry_entered_at,
        };
        let (rule, decision) = evaluate(&self.config, &ctx, input);

        if decision.restart_anger {
            self.angry_entered_at = input.now;
        }
        let previous = self.mood;
        self.mood = decision.mood;

        if previous != self.mood {
            debug!(
                from = previous.as_str(),
                to = self.mood.as_str(),
                rule = rule.name(),
                idle_ms = input.idle.as_millis() as u64,
                "mood changed"
            );
        }

        MoodStep {
            previous,
            mood: self.mood,
            rule,
            reset_click_burst: decision.reset_click_burst,
        }
    }
}

impl Default for MoodMachine {
    fn default() -> Self {
        Self::new(MoodConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chithra_core::{ControlMode, Gesture};
    use std::time::Duration;

    fn at(ms: i64) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    /// Pointer input with the last movement at t = 0
    fn idle_since_zero(now_ms: i64) -> MoodInput {
        MoodInput::idle_pointer(at(now_ms), Duration::from_millis(now_ms as u64))
    }

    #[test]
    fn test_starts_content() {
        assert_eq!(MoodMachine::default().mood(), Mood::Content);
    }

    #[test]
    fn test_idle_escalation() {
        let mut machine = MoodMachine::default();

        assert_eq!(machine.step(&idle_since_zero(3500)).mood, Mood::Bored);
        assert_eq!(machine.step(&idle_since_zero(10_500)).mood, Mood::Sad);

        let step = machine.step(&idle_since_zero(15_500));
        assert_eq!(step.mood, Mood::Angry);
        assert_eq!(step.rule, RuleKind::IdleLadder);
        assert_eq!(machine.angry_entered_at(), at(15_500));
    }

    #[test]
    fn test_click_burst_overrides_everything() {
        let mut machine = MoodMachine::with_mood(MoodConfig::default(), Mood::Playful, at(0));
        let mut input = idle_since_zero(900);
        input.click_burst_triggered = true;
        input.mode = ControlMode::HandTracking;
        input.gesture = Some(Gesture::OpenPalm);

        let step = machine.step(&input);
        assert_eq!(step.mood, Mood::Angry);
        assert_eq!(step.rule, RuleKind::ClickBurst);
        assert!(step.reset_click_burst);
        assert_eq!(machine.angry_entered_at(), at(900));
    }

    #[test]
    fn test_angry_calms_with_slow_pointer() {
        let mut machine = MoodMachine::with_mood(MoodConfig::default(), Mood::Angry, at(1000));
        let mut input = MoodInput::idle_pointer(at(4500), Duration::from_millis(10));
        input.motion_speed = 2.0;
        assert_eq!(machine.step(&input).mood, Mood::Content);
    }

    #[test]
    fn test_angry_holds_under_fast_pointer_until_timeout() {
        let mut machine = MoodMachine::with_mood(MoodConfig::default(), Mood::Angry, at(0));
        for t in (100..=10_000).step_by(100) {
            let mut input = MoodInput::idle_pointer(at(t), Duration::from_millis(5));
            input.motion_speed = 5.0;
            assert_eq!(machine.step(&input).mood, Mood::Angry, "at t={t}");
        }
        let mut input = MoodInput::idle_pointer(at(10_016), Duration::from_millis(5));
        input.motion_speed = 5.0;
        assert_eq!(machine.step(&input).mood, Mood::Content);
    }

    #[test]
    fn test_fist_restarts_anger() {
        let mut machine = MoodMachine::default();
        let mut input = MoodInput::idle_pointer(at(2000), Duration::ZERO);
        input.mode = ControlMode::HandTracking;
        input.tracker_active = true;
        input.gesture = Some(Gesture::Fist);

        let step = machine.step(&input);
        assert_eq!(step.mood, Mood::Angry);
        assert_eq!(step.rule, RuleKind::Gesture);
        assert_eq!(machine.angry_entered_at(), at(2000));
    }

    #[test]
    fn test_active_tracker_suppresses_decay() {
        let mut machine = MoodMachine::with_mood(MoodConfig::default(), Mood::Playful, at(0));
        let mut input = idle_since_zero(60_000);
        input.mode = ControlMode::HandTracking;
        input.tracker_active = true;

        let step = machine.step(&input);
        assert_eq!(step.mood, Mood::Playful);
        assert_eq!(step.rule, RuleKind::HandTrackingHold);
    }

    #[test]
    fn test_repeated_identical_tick_is_stable() {
        let mut machine = MoodMachine::default();
        let input = idle_since_zero(15_500);
        let first = machine.step(&input).mood;
        for _ in 0..10 {
            assert_eq!(machine.step(&input).mood, first);
        }
        assert_eq!(machine.angry_entered_at(), at(15_500));
    }
}
