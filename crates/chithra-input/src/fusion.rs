//! Input Fusion - single source of truth for the movement target
//!
//! Exactly one control mode is active. Pointer samples only count in
//! Pointer mode, landmark frames only in HandTracking mode; clicks count in
//! both. The tick reads one `InputSnapshot` per frame.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use chithra_core::{
    ControlMode, Gesture, LandmarkFrame, PointerClick, PointerSample, Timestamp, Vec2, Vec3,
    ViewportSize,
};
use chithra_gesture::{classify, GestureConfig, GestureDebouncer, HandLandmark, LandmarkExt};

use crate::{landmark_to_scene, pointer_to_scene, ClickBurst, ClickBurstConfig};

/// Input fusion configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Half-width of the square scene range targets are projected into
    pub scene_extent: f32,
    /// Click burst thresholds
    pub click_burst: ClickBurstConfig,
    /// How long the last pointer speed stays valid without a new sample
    pub motion_hold_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            scene_extent: 20.0,
            click_burst: ClickBurstConfig::default(),
            motion_hold_ms: 100,
        }
    }
}

impl InputConfig {
    pub fn motion_hold(&self) -> Duration {
        Duration::from_millis(self.motion_hold_ms)
    }
}

/// What the mood machine and driver need from input, sampled once per tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSnapshot {
    pub mode: ControlMode,
    /// Movement target derived from the active source
    pub target: Vec3,
    /// Pointer displacement of the last sample, zero once the sample is older than the hold
    pub motion_speed: f32,
    /// Time since the last pointer sample or landmark frame
    pub idle: Duration,
    /// Click burst has reached its threshold in time
    pub click_burst_triggered: bool,
    /// Gesture accepted since the previous tick
    pub gesture: Option<Gesture>,
}

/// Merges pointer and hand-tracking input
#[derive(Debug, Clone)]
pub struct InputFusion {
    config: InputConfig,
    gesture_config: GestureConfig,
    debouncer: GestureDebouncer,
    mode: ControlMode,
    viewport: ViewportSize,
    last_pointer: Vec2,
    motion_speed: f32,
    last_sample: Option<Timestamp>,
    hand_target: Vec3,
    last_movement: Timestamp,
    clicks: ClickBurst,
    pending_gesture: Option<Gesture>,
}

impl InputFusion {
    /// Start in Pointer mode with the pointer resting at the viewport center
    pub fn new(
        config: InputConfig,
        gesture_config: GestureConfig,
        viewport: ViewportSize,
        now: Timestamp,
    ) -> Self {
        let (cx, cy) = viewport.center();
        Self {
            config,
            gesture_config,
            debouncer: GestureDebouncer::new(gesture_config.debounce_window()),
            mode: ControlMode::Pointer,
            viewport,
            last_pointer: Vec2::new(cx, cy),
            motion_speed: 0.0,
            last_sample: None,
            hand_target: Vec3::ZERO,
            last_movement: now,
            clicks: ClickBurst::new(config.click_burst),
            pending_gesture: None,
        }
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    /// Switch the active source
    ///
    /// Stale hand-tracking state is left in place; it is simply not read
    /// while in Pointer mode.
    pub fn set_mode(&mut self, mode: ControlMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.pending_gesture = None;
        self.motion_speed = 0.0;
        self.last_sample = None;
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Apply a viewport resize, ignoring degenerate sizes
    pub fn resize(&mut self, viewport: ViewportSize) -> bool {
        if !(viewport.width > 0.0 && viewport.height > 0.0) {
            debug!(width = viewport.width, height = viewport.height, "ignoring degenerate viewport");
            return false;
        }
        self.viewport = viewport;
        true
    }

    /// Pointer moved; returns false when not in Pointer mode
    pub fn pointer_moved(&mut self, sample: &PointerSample) -> bool {
        if self.mode != ControlMode::Pointer {
            return false;
        }
        let position = Vec2::new(sample.x, sample.y);
        self.motion_speed = position.distance(&self.last_pointer);
        self.last_sample = Some(sample.timestamp);
        self.last_pointer = position;
        self.last_movement = sample.timestamp;
        true
    }

    /// Pointer pressed; only hits on the creature count
    pub fn pointer_clicked(&mut self, click: &PointerClick) -> bool {
        if !click.hit_creature {
            return false;
        }
        let count = self.clicks.register(click.timestamp);
        debug!(count, "click on creature");
        true
    }

    /// Landmark frame from the tracker; returns the gesture if accepted
    ///
    /// Outside HandTracking mode frames are ignored entirely.
    pub fn landmarks(&mut self, frame: &LandmarkFrame) -> Option<Gesture> {
        if self.mode != ControlMode::HandTracking {
            return None;
        }

        let tip = frame.point(HandLandmark::IndexTip);
        self.hand_target = landmark_to_scene(tip.x, tip.y, self.config.scene_extent);
        self.last_movement = frame.timestamp;

        let gesture = classify(frame, &self.gesture_config);
        let accepted = self.debouncer.offer(gesture, frame.timestamp)?;
        self.pending_gesture = Some(accepted);
        Some(accepted)
    }

    /// Movement target from the active source
    pub fn target(&self) -> Vec3 {
        match self.mode {
            ControlMode::Pointer => pointer_to_scene(
                self.last_pointer.x,
                self.last_pointer.y,
                &self.viewport,
                self.config.scene_extent,
            ),
            ControlMode::HandTracking => self.hand_target,
        }
    }

    /// Sample input for one tick
    ///
    /// Consumes the pending gesture. Motion speed falls to zero once the
    /// last pointer sample is older than the motion hold, whatever the tick
    /// rate.
    pub fn begin_tick(&mut self, now: Timestamp) -> InputSnapshot {
        let stale = self
            .last_sample
            .map_or(true, |at| now.since(at) > self.config.motion_hold());
        if stale {
            self.motion_speed = 0.0;
        }

        InputSnapshot {
            mode: self.mode,
            target: self.target(),
            motion_speed: self.motion_speed,
            idle: now.since(self.last_movement),
            click_burst_triggered: self.clicks.is_triggered(now),
            gesture: self.pending_gesture.take(),
        }
    }

    /// Clear the click burst after it triggered a mood change
    pub fn reset_click_burst(&mut self) {
        self.clicks.reset();
    }

    pub fn click_count(&self) -> u32 {
        self.clicks.count()
    }

    pub fn last_movement(&self) -> Timestamp {
        self.last_movement
    }

    pub fn gestures_debounced(&self) -> u64 {
        self.debouncer.dropped_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chithra_core::LANDMARK_COUNT;

    fn at(ms: i64) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    fn fusion() -> InputFusion {
        InputFusion::new(
            InputConfig::default(),
            GestureConfig::default(),
            ViewportSize::new(800.0, 600.0),
            at(0),
        )
    }

    /// Open palm with the index tip at (x, y)
    fn palm_at(x: f32, y: f32, ms: i64) -> LandmarkFrame {
        let mut landmarks = [Vec3::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        for (tip, pip) in HandLandmark::finger_tips_and_pips() {
            landmarks[pip.index()] = Vec3::new(x, y + 0.1, 0.0);
            landmarks[tip.index()] = Vec3::new(x, y, 0.0);
        }
        landmarks[HandLandmark::ThumbTip.index()] = Vec3::new(x + 0.3, y + 0.2, 0.0);
        LandmarkFrame::new(landmarks, at(ms))
    }

    #[test]
    fn test_initial_target_is_viewport_center() {
        assert_eq!(fusion().target(), Vec3::ZERO);
    }

    #[test]
    fn test_pointer_speed_and_target() {
        let mut input = fusion();
        assert!(input.pointer_moved(&PointerSample::new(430.0, 340.0, at(100))));

        let snapshot = input.begin_tick(at(116));
        assert!((snapshot.motion_speed - 50.0).abs() < 1e-4);
        assert_eq!(snapshot.idle, Duration::from_millis(16));
        assert!((snapshot.target.x - 1.5).abs() < 1e-4);
        assert!((snapshot.target.y - -2.6666667).abs() < 1e-4);
    }

    #[test]
    fn test_motion_speed_held_then_released() {
        let mut input = fusion();
        input.pointer_moved(&PointerSample::new(500.0, 300.0, at(10)));
        assert_eq!(input.begin_tick(at(16)).motion_speed, 100.0);
        // Ticks without a new sample inside the hold keep the speed
        assert_eq!(input.begin_tick(at(32)).motion_speed, 100.0);
        assert_eq!(input.begin_tick(at(110)).motion_speed, 100.0);
        assert_eq!(input.begin_tick(at(111)).motion_speed, 0.0);
        // and it does not come back
        assert_eq!(input.begin_tick(at(112)).motion_speed, 0.0);
    }

    #[test]
    fn test_motion_speed_independent_of_tick_rate() {
        let samples: Vec<i64> = (0..20).map(|i| 5 + i * 32).collect();
        let speeds = |tick_ms: i64| {
            let mut input = fusion();
            let mut x = 400.0;
            let mut pending = samples.iter().peekable();
            let mut seen = Vec::new();
            let mut now = 0;
            while now <= 640 {
                while let Some(&t) = pending.next_if(|&&t| t <= now) {
                    x += 10.0;
                    input.pointer_moved(&PointerSample::new(x, 300.0, at(t)));
                }
                seen.push(input.begin_tick(at(now)).motion_speed);
                now += tick_ms;
            }
            seen
        };

        for tick_ms in [8, 16, 32, 64] {
            let seen = speeds(tick_ms);
            // After the first sample every tick sees the steady speed
            assert!(seen[1..].iter().all(|&v| v == 10.0), "tick {tick_ms}ms: {seen:?}");
        }
    }

    #[test]
    fn test_mode_switch_clears_motion_speed() {
        let mut input = fusion();
        input.pointer_moved(&PointerSample::new(500.0, 300.0, at(10)));
        input.set_mode(ControlMode::HandTracking);
        assert_eq!(input.begin_tick(at(20)).motion_speed, 0.0);
    }

    #[test]
    fn test_pointer_ignored_in_hand_mode() {
        let mut input = fusion();
        input.set_mode(ControlMode::HandTracking);
        assert!(!input.pointer_moved(&PointerSample::new(0.0, 0.0, at(50))));
        assert_eq!(input.last_movement(), at(0));
    }

    #[test]
    fn test_landmarks_ignored_in_pointer_mode() {
        let mut input = fusion();
        assert_eq!(input.landmarks(&palm_at(0.1, 0.1, 50)), None);
        assert_eq!(input.target(), Vec3::ZERO);
        assert_eq!(input.last_movement(), at(0));
    }

    #[test]
    fn test_hand_target_and_gesture() {
        let mut input = fusion();
        input.set_mode(ControlMode::HandTracking);

        assert_eq!(input.landmarks(&palm_at(0.25, 0.25, 40)), Some(Gesture::OpenPalm));
        let snapshot = input.begin_tick(at(50));
        assert_eq!(snapshot.target, Vec3::new(10.0, 10.0, 0.0));
        assert_eq!(snapshot.gesture, Some(Gesture::OpenPalm));
        assert_eq!(snapshot.idle, Duration::from_millis(10));

        // Gesture is consumed by the tick
        assert_eq!(input.begin_tick(at(60)).gesture, None);
    }

    #[test]
    fn test_hand_frames_debounced_but_still_move_target() {
        let mut input = fusion();
        input.set_mode(ControlMode::HandTracking);
        input.landmarks(&palm_at(0.5, 0.5, 0));
        input.begin_tick(at(1));

        assert_eq!(input.landmarks(&palm_at(0.25, 0.5, 200)), None);
        let snapshot = input.begin_tick(at(210));
        assert_eq!(snapshot.gesture, None);
        assert_eq!(snapshot.target.x, 10.0);
        assert_eq!(input.gestures_debounced(), 1);
    }

    #[test]
    fn test_mode_round_trip_restores_pointer_behavior() {
        let mut input = fusion();
        input.pointer_moved(&PointerSample::new(400.0, 300.0, at(0)));
        input.begin_tick(at(1));

        input.set_mode(ControlMode::HandTracking);
        input.landmarks(&palm_at(0.0, 0.0, 100));
        input.set_mode(ControlMode::Pointer);

        input.pointer_moved(&PointerSample::new(410.0, 300.0, at(200)));
        let snapshot = input.begin_tick(at(201));
        assert!((snapshot.motion_speed - 10.0).abs() < 1e-4);
        assert!((snapshot.target.x - 0.5).abs() < 1e-4);
        assert_eq!(snapshot.gesture, None);
    }

    #[test]
    fn test_clicks_count_in_any_mode() {
        let mut input = fusion();
        input.set_mode(ControlMode::HandTracking);
        for t in [0, 400, 900] {
            assert!(input.pointer_clicked(&PointerClick::on_creature(1.0, 1.0, at(t))));
        }
        assert!(!input.pointer_clicked(&PointerClick::missed(1.0, 1.0, at(950))));
        assert!(input.begin_tick(at(900)).click_burst_triggered);

        input.reset_click_burst();
        assert!(!input.begin_tick(at(901)).click_burst_triggered);
    }

    #[test]
    fn test_degenerate_resize_ignored() {
        let mut input = fusion();
        assert!(!input.resize(ViewportSize::new(0.0, 600.0)));
        assert!(input.resize(ViewportSize::new(1000.0, 500.0)));
        assert_eq!(input.viewport(), ViewportSize::new(1000.0, 500.0));
    }
}
