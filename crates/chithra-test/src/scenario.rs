//! Scripted scenarios
//!
//! A scenario is a timeline of host events replayed against an engine on a
//! fixed tick grid. Events due at or before a tick are applied before that
//! tick runs.

use std::time::Duration;

use thiserror::Error;

use chithra_core::{
    ChithraError, ControlMode, Mood, PointerClick, PointerSample, Timestamp, ViewportSize,
};
use chithra_pose::Frame;
use chithra_runtime::{Engine, EngineConfig, EngineStats, HandTracker, PoseSink};

use crate::{HandShape, LandmarkFixture};

/// Scenario failures
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("event {index} at {at:?} is earlier than the event before it")]
    OutOfOrder { index: usize, at: Timestamp },

    #[error("tick interval must be positive")]
    ZeroTick,

    #[error("engine error: {0}")]
    Engine(#[from] ChithraError),
}

/// One host event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptEvent {
    PointerMove { x: f32, y: f32 },
    Click { x: f32, y: f32, hit: bool },
    Hand(HandShape),
    Mode(ControlMode),
    Resize(ViewportSize),
}

/// Sink keeping every mood and the most recent frame
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub moods: Vec<Mood>,
    pub last: Option<Frame>,
}

impl PoseSink for RecordingSink {
    fn present(&mut self, frame: &Frame) {
        self.moods.push(frame.mood);
        self.last = Some(frame.clone());
    }
}

/// Result of a replay
#[derive(Debug, Default)]
pub struct ScenarioReport {
    /// Time of each tick, parallel to `sink.moods`
    pub ticks: Vec<Timestamp>,
    pub sink: RecordingSink,
    /// (time, from, to) for every mood change
    pub transitions: Vec<(Timestamp, Mood, Mood)>,
    pub mode_errors: Vec<(Timestamp, ChithraError)>,
    pub stats: EngineStats,
}

impl ScenarioReport {
    /// Mood after the last tick at or before `ms`
    pub fn mood_at(&self, ms: i64) -> Option<Mood> {
        let at = Timestamp::from_millis(ms);
        let n = self.ticks.partition_point(|&t| t <= at);
        n.checked_sub(1).map(|i| self.sink.moods[i])
    }

    pub fn final_mood(&self) -> Option<Mood> {
        self.sink.moods.last().copied()
    }

    /// First tick that entered `mood`
    pub fn first_entry(&self, mood: Mood) -> Option<Timestamp> {
        self.transitions
            .iter()
            .find(|(_, _, to)| *to == mood)
            .map(|(at, _, _)| *at)
    }
}

/// Event timeline plus tick grid
#[derive(Debug, Clone)]
pub struct Scenario {
    events: Vec<(Timestamp, ScriptEvent)>,
    tick: Duration,
    seed: u64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new()
    }
}

impl Scenario {
    /// 100ms ticks, fixture seed 0
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            tick: Duration::from_millis(100),
            seed: 0,
        }
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Append an event; events must be added in time order
    pub fn at(mut self, ms: i64, event: ScriptEvent) -> Self {
        self.events.push((Timestamp::from_millis(ms), event));
        self
    }

    /// Build a fresh engine at t=0 and replay
    pub fn run_fresh<T: HandTracker>(
        &self,
        config: EngineConfig,
        tracker: T,
        until_ms: i64,
    ) -> Result<(Engine<T>, ScenarioReport), ScenarioError> {
        let mut engine = Engine::new(config, tracker, Timestamp::ZERO)?;
        let report = self.run(&mut engine, Timestamp::ZERO, Timestamp::from_millis(until_ms))?;
        Ok((engine, report))
    }

    /// Replay against `engine`, ticking from `start` through `until` inclusive
    pub fn run<T: HandTracker>(
        &self,
        engine: &mut Engine<T>,
        start: Timestamp,
        until: Timestamp,
    ) -> Result<ScenarioReport, ScenarioError> {
        if self.tick.is_zero() {
            return Err(ScenarioError::ZeroTick);
        }
        for (index, pair) in self.events.windows(2).enumerate() {
            if pair[1].0 < pair[0].0 {
                return Err(ScenarioError::OutOfOrder {
                    index: index + 1,
                    at: pair[1].0,
                });
            }
        }

        let mut fixture = LandmarkFixture::new(self.seed);
        let mut report = ScenarioReport::default();
        let mut pending = self.events.iter().peekable();
        let mut now = start;

        while now <= until {
            while let Some((at, event)) = pending.next_if(|(at, _)| *at <= now) {
                if let Err(e) = apply(engine, &mut fixture, *at, event) {
                    report.mode_errors.push((*at, e));
                }
            }

            let before = engine.mood();
            let mood = engine.tick_into(now, &mut report.sink);
            if mood != before {
                report.transitions.push((now, before, mood));
            }
            report.ticks.push(now);
            now = now + self.tick;
        }

        report.stats = engine.stats();
        Ok(report)
    }
}

fn apply<T: HandTracker>(
    engine: &mut Engine<T>,
    fixture: &mut LandmarkFixture,
    at: Timestamp,
    event: &ScriptEvent,
) -> Result<(), ChithraError> {
    match *event {
        ScriptEvent::PointerMove { x, y } => engine.pointer_moved(&PointerSample::new(x, y, at)),
        ScriptEvent::Click { x, y, hit } => {
            let click = if hit {
                PointerClick::on_creature(x, y, at)
            } else {
                PointerClick::missed(x, y, at)
            };
            engine.pointer_clicked(&click);
        }
        ScriptEvent::Hand(shape) => {
            engine.landmark_sender().push(fixture.frame(shape, at));
        }
        ScriptEvent::Mode(mode) => engine.set_control_mode(mode)?,
        ScriptEvent::Resize(viewport) => {
            engine.resize(viewport);
        }
    }
    Ok(())
}
