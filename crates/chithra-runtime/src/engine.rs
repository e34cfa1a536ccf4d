//! The creature engine
//!
//! Owns fused input, the mood machine, the procedural driver and the
//! tracker. Hosts feed it events between ticks and call `tick` once per
//! rendered frame.

use std::time::Duration;

use tracing::{debug, info, warn};

use chithra_core::{
    ChithraResult, ControlMode, LandmarkFrame, Mood, PointerClick, PointerSample, Timestamp,
    ViewportSize,
};
use chithra_input::InputFusion;
use chithra_mood::{MoodInput, MoodMachine};
use chithra_pose::{Frame, ProceduralDriver};

use crate::{EngineConfig, HandTracker, LandmarkMailbox, LandmarkSender, PoseSink, TrackerFailurePolicy};

/// Engine statistics
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EngineStats {
    pub ticks: u64,
    pub mood_changes: u64,
    pub gestures_accepted: u64,
    pub gestures_debounced: u64,
    /// Landmark frames ignored outside HandTracking or lost to a full mailbox
    pub frames_dropped: u64,
    pub last_tick_interval: Duration,
}

/// Single-threaded creature engine
pub struct Engine<T: HandTracker> {
    config: EngineConfig,
    tracker: T,
    input: InputFusion,
    mood: MoodMachine,
    driver: ProceduralDriver,
    mailbox: LandmarkMailbox,
    last_tick: Option<Timestamp>,
    stats: EngineStats,
}

impl<T: HandTracker> Engine<T> {
    /// Build an engine in Pointer mode, Content mood
    pub fn new(config: EngineConfig, tracker: T, now: Timestamp) -> ChithraResult<Self> {
        config.validate()?;
        let input = InputFusion::new(config.input, config.gesture, config.viewport, now);
        let mood = MoodMachine::new(config.mood);
        let driver = ProceduralDriver::new(config.driver, now);
        let mailbox = LandmarkMailbox::new(config.mailbox_capacity);
        debug!(segments = config.driver.segment_count, "engine created");

        Ok(Self {
            config,
            tracker,
            input,
            mood,
            driver,
            mailbox,
            last_tick: None,
            stats: EngineStats::default(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn mood(&self) -> Mood {
        self.mood.mood()
    }

    pub fn control_mode(&self) -> ControlMode {
        self.input.mode()
    }

    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    /// Clicks in the current burst
    pub fn click_count(&self) -> u32 {
        self.input.click_count()
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            frames_dropped: self.stats.frames_dropped + self.mailbox.overflowed(),
            gestures_debounced: self.input.gestures_debounced(),
            ..self.stats
        }
    }

    /// Handle for delivering tracker frames from another thread
    pub fn landmark_sender(&self) -> LandmarkSender {
        self.mailbox.sender()
    }

    /// Switch the control source, starting or stopping the tracker
    ///
    /// A failed start is reported as an error after the configured
    /// failure policy has been applied.
    pub fn set_control_mode(&mut self, mode: ControlMode) -> ChithraResult<()> {
        if mode == self.input.mode() {
            return Ok(());
        }

        match mode {
            ControlMode::HandTracking => {
                self.mailbox.clear();
                if let Err(e) = self.tracker.start() {
                    match self.config.tracker_failure {
                        TrackerFailurePolicy::Stall => {
                            warn!(error = %e, "hand tracker failed to start, target will not move");
                            self.input.set_mode(ControlMode::HandTracking);
                        }
                        TrackerFailurePolicy::RevertToPointer => {
                            warn!(error = %e, "hand tracker failed to start, staying in pointer mode");
                        }
                    }
                    return Err(e);
                }
                self.input.set_mode(ControlMode::HandTracking);
            }
            ControlMode::Pointer => {
                self.tracker.stop();
                let stale = self.mailbox.clear();
                self.stats.frames_dropped += stale as u64;
                self.input.set_mode(ControlMode::Pointer);
            }
        }

        info!(mode = mode.as_str(), "control mode changed");
        Ok(())
    }

    /// Flip between Pointer and HandTracking
    pub fn toggle_control_mode(&mut self) -> ChithraResult<ControlMode> {
        let next = self.input.mode().toggled();
        self.set_control_mode(next)?;
        Ok(self.input.mode())
    }

    pub fn pointer_moved(&mut self, sample: &PointerSample) {
        self.input.pointer_moved(sample);
    }

    pub fn pointer_clicked(&mut self, click: &PointerClick) {
        self.input.pointer_clicked(click);
    }

    /// Deliver a landmark frame on the engine's thread
    pub fn landmarks(&mut self, frame: &LandmarkFrame) {
        if self.input.mode() != ControlMode::HandTracking {
            self.stats.frames_dropped += 1;
            return;
        }
        if self.input.landmarks(frame).is_some() {
            self.stats.gestures_accepted += 1;
        }
    }

    pub fn resize(&mut self, viewport: ViewportSize) -> bool {
        self.input.resize(viewport)
    }

    /// Run one tick and return the frame to render
    pub fn tick(&mut self, now: Timestamp) -> Frame {
        let dt = match self.last_tick {
            Some(previous) => now.since(previous),
            None => self.config.driver.nominal_tick(),
        };
        self.last_tick = Some(now);

        for frame in self.mailbox.drain() {
            self.landmarks(&frame);
        }

        let snapshot = self.input.begin_tick(now);
        let step = self.mood.step(&MoodInput {
            now,
            mode: snapshot.mode,
            tracker_active: self.tracker.is_active(),
            motion_speed: snapshot.motion_speed,
            idle: snapshot.idle,
            click_burst_triggered: snapshot.click_burst_triggered,
            gesture: snapshot.gesture,
        });
        if step.reset_click_burst {
            self.input.reset_click_burst();
        }
        if step.changed() {
            self.stats.mood_changes += 1;
        }

        self.stats.ticks += 1;
        self.stats.last_tick_interval = dt;
        self.driver.step(step.mood, snapshot.target, now, dt)
    }

    /// Run one tick and hand the frame to a sink
    pub fn tick_into<S: PoseSink + ?Sized>(&mut self, now: Timestamp, sink: &mut S) -> Mood {
        let frame = self.tick(now);
        sink.present(&frame);
        frame.mood
    }

    /// Stop the tracker; the engine stays usable in Pointer mode
    pub fn shutdown(&mut self) {
        if self.tracker.is_active() {
            self.tracker.stop();
            info!("hand tracker stopped on shutdown");
        }
        self.mailbox.clear();
        self.input.set_mode(ControlMode::Pointer);
    }
}

impl<T: HandTracker> Drop for Engine<T> {
    fn drop(&mut self) {
        if self.tracker.is_active() {
            self.tracker.stop();
        }
    }
}

impl<T: HandTracker> std::fmt::Debug for Engine<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("mood", &self.mood.mood())
            .field("mode", &self.input.mode())
            .field("stats", &self.stats)
            .finish()
    }
}
