//! External hand tracker lifecycle
//!
//! The tracker is a scoped resource: started when entering HandTracking,
//! stopped when leaving it or on shutdown. Frames it produces reach the
//! engine through a `LandmarkSender`.

use serde::{Deserialize, Serialize};

use chithra_core::ChithraResult;

/// Camera-backed landmark source
pub trait HandTracker {
    /// Start producing frames; must not block beyond device setup
    fn start(&mut self) -> ChithraResult<()>;

    /// Stop producing frames; idempotent
    fn stop(&mut self);

    fn is_active(&self) -> bool;
}

/// What to do when the tracker fails to start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackerFailurePolicy {
    /// Stay in HandTracking with no target updates
    #[default]
    Stall,
    /// Fall back to Pointer mode
    RevertToPointer,
}

/// Tracker for pointer-only hosts; starts successfully, never produces frames
#[derive(Debug, Default)]
pub struct NullTracker {
    active: bool,
}

impl HandTracker for NullTracker {
    fn start(&mut self) -> ChithraResult<()> {
        self.active = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

impl<T: HandTracker + ?Sized> HandTracker for Box<T> {
    fn start(&mut self) -> ChithraResult<()> {
        (**self).start()
    }

    fn stop(&mut self) {
        (**self).stop()
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}
