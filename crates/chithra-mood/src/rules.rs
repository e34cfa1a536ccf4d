//! Ordered transition rules
//!
//! Each rule either passes (`None`) or decides the next mood. Rules are pure
//! functions of the machine state and the tick input so each can be tested on
//! its own.

use std::time::Duration;

use chithra_core::{ControlMode, Gesture, Mood, Timestamp};

use crate::MoodConfig;

/// Everything the machine reads in one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodInput {
    pub now: Timestamp,
    pub mode: ControlMode,
    /// External tracker is running
    pub tracker_active: bool,
    pub motion_speed: f32,
    /// Time since the last movement from either source
    pub idle: Duration,
    pub click_burst_triggered: bool,
    /// Gesture accepted since the previous tick
    pub gesture: Option<Gesture>,
}

impl MoodInput {
    /// Pointer-mode input with no events
    pub fn idle_pointer(now: Timestamp, idle: Duration) -> Self {
        Self {
            now,
            mode: ControlMode::Pointer,
            tracker_active: false,
            motion_speed: 0.0,
            idle,
            click_burst_triggered: false,
            gesture: None,
        }
    }

    /// Passive decay applies unless the tracker is actively driving input
    pub fn passive_decay_allowed(&self) -> bool {
        self.mode == ControlMode::Pointer || !self.tracker_active
    }
}

/// Machine state visible to rules
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodContext {
    pub mood: Mood,
    pub angry_entered_at: Timestamp,
}

/// Outcome of a matching rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub mood: Mood,
    /// Restart the anger timer at `now`
    pub restart_anger: bool,
    /// Clear the click burst
    pub reset_click_burst: bool,
}

impl Decision {
    pub fn to(mood: Mood) -> Self {
        Self {
            mood,
            restart_anger: false,
            reset_click_burst: false,
        }
    }

    pub fn anger() -> Self {
        Self {
            mood: Mood::Angry,
            restart_anger: true,
            reset_click_burst: false,
        }
    }
}

/// Rule identifier, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    ClickBurst,
    Gesture,
    HandTrackingHold,
    AngryCooldown,
    PlayfulTimeout,
    IdleLadder,
}

impl RuleKind {
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::ClickBurst => "click_burst",
            RuleKind::Gesture => "gesture",
            RuleKind::HandTrackingHold => "hand_tracking_hold",
            RuleKind::AngryCooldown => "angry_cooldown",
            RuleKind::PlayfulTimeout => "playful_timeout",
            RuleKind::IdleLadder => "idle_ladder",
        }
    }
}

type RuleFn = fn(&MoodConfig, &MoodContext, &MoodInput) -> Option<Decision>;

/// A guard/action pair
#[derive(Clone, Copy)]
pub struct Rule {
    pub kind: RuleKind,
    pub apply: RuleFn,
}

/// The rule table, highest priority first
pub const RULES: [Rule; 6] = [
    Rule { kind: RuleKind::ClickBurst, apply: click_burst },
    Rule { kind: RuleKind::Gesture, apply: gesture },
    Rule { kind: RuleKind::HandTrackingHold, apply: hand_tracking_hold },
    Rule { kind: RuleKind::AngryCooldown, apply: angry_cooldown },
    Rule { kind: RuleKind::PlayfulTimeout, apply: playful_timeout },
    Rule { kind: RuleKind::IdleLadder, apply: idle_ladder },
];

/// Evaluate the table; the last rule always matches
pub fn evaluate(
    config: &MoodConfig,
    ctx: &MoodContext,
    input: &MoodInput,
) -> (RuleKind, Decision) {
    for rule in RULES.iter() {
        if let Some(decision) = (rule.apply)(config, ctx, input) {
            return (rule.kind, decision);
        }
    }
    // Unreachable while IdleLadder is last; keep the mood rather than panic
    (RuleKind::IdleLadder, Decision::to(ctx.mood))
}

pub fn click_burst(_: &MoodConfig, _: &MoodContext, input: &MoodInput) -> Option<Decision> {
    if !input.click_burst_triggered {
        return None;
    }
    Some(Decision {
        reset_click_burst: true,
        ..Decision::anger()
    })
}

pub fn gesture(_: &MoodConfig, _: &MoodContext, input: &MoodInput) -> Option<Decision> {
    if input.mode != ControlMode::HandTracking {
        return None;
    }
    match input.gesture? {
        Gesture::Fist => Some(Decision::anger()),
        Gesture::Pinch => Some(Decision::to(Mood::Playful)),
        Gesture::OpenPalm => Some(Decision::to(Mood::Content)),
        Gesture::Point => None,
    }
}

pub fn hand_tracking_hold(_: &MoodConfig, ctx: &MoodContext, input: &MoodInput) -> Option<Decision> {
    if input.passive_decay_allowed() {
        return None;
    }
    Some(Decision::to(ctx.mood))
}

pub fn angry_cooldown(config: &MoodConfig, ctx: &MoodContext, input: &MoodInput) -> Option<Decision> {
    if ctx.mood != Mood::Angry {
        return None;
    }
    let angry_for = input.now.since(ctx.angry_entered_at);
    let calmed = input.motion_speed < config.calm_speed && angry_for > config.angry_calm();
    if calmed || angry_for > config.angry_max() {
        Some(Decision::to(Mood::Content))
    } else {
        Some(Decision::to(Mood::Angry))
    }
}

pub fn playful_timeout(config: &MoodConfig, ctx: &MoodContext, input: &MoodInput) -> Option<Decision> {
    if ctx.mood != Mood::Playful {
        return None;
    }
    if input.idle > config.playful_idle() {
        Some(Decision::to(Mood::Content))
    } else {
        Some(Decision::to(Mood::Playful))
    }
}

pub fn idle_ladder(config: &MoodConfig, _: &MoodContext, input: &MoodInput) -> Option<Decision> {
    let decision = if input.mode == ControlMode::Pointer && input.motion_speed > config.playful_speed {
        Decision::to(Mood::Playful)
    } else if input.idle > config.angry_idle() {
        Decision::anger()
    } else if input.idle > config.sad_idle() {
        Decision::to(Mood::Sad)
    } else if input.idle > config.bored_idle() {
        Decision::to(Mood::Bored)
    } else {
        Decision::to(Mood::Content)
    };
    Some(decision)
}
