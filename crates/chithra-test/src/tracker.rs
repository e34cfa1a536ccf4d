//! Tracker double with start/stop accounting

use chithra_core::{ChithraError, ChithraResult};
use chithra_runtime::HandTracker;

/// Tracker that records its lifecycle and can refuse to start
#[derive(Debug, Default)]
pub struct ScriptedTracker {
    active: bool,
    failures_left: u32,
    pub starts: u32,
    pub stops: u32,
}

impl ScriptedTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next `n` start attempts
    pub fn failing(n: u32) -> Self {
        Self {
            failures_left: n,
            ..Self::default()
        }
    }
}

impl HandTracker for ScriptedTracker {
    fn start(&mut self) -> ChithraResult<()> {
        self.starts += 1;
        if self.failures_left > 0 {
            self.failures_left -= 1;
            return Err(ChithraError::TrackerStart("camera unavailable".into()));
        }
        self.active = true;
        Ok(())
    }

    fn stop(&mut self) {
        if self.active {
            self.stops += 1;
        }
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
