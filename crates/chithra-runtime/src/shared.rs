//! Engine handle shared between threads
//!
//! Input callbacks and the tick loop may run on different threads. Each
//! operation takes the lock for its own duration only.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use chithra_core::{
    ChithraResult, ControlMode, LandmarkFrame, Mood, PointerClick, PointerSample, Timestamp,
    ViewportSize,
};
use chithra_pose::Frame;

use crate::{Engine, EngineStats, HandTracker, LandmarkSender};

/// Cloneable, lock-protected engine
pub struct SharedEngine<T: HandTracker> {
    inner: Arc<Mutex<Engine<T>>>,
}

impl<T: HandTracker> Clone for SharedEngine<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: HandTracker> SharedEngine<T> {
    pub fn new(engine: Engine<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Exclusive access; do not hold across an await point
    pub fn lock(&self) -> MutexGuard<'_, Engine<T>> {
        self.inner.lock()
    }

    pub fn tick(&self, now: Timestamp) -> Frame {
        self.inner.lock().tick(now)
    }

    pub fn pointer_moved(&self, sample: &PointerSample) {
        self.inner.lock().pointer_moved(sample);
    }

    pub fn pointer_clicked(&self, click: &PointerClick) {
        self.inner.lock().pointer_clicked(click);
    }

    /// Deliver a landmark frame directly; tracker threads may prefer `landmark_sender`
    pub fn landmarks(&self, frame: &LandmarkFrame) {
        self.inner.lock().landmarks(frame);
    }

    /// Queue handle that never touches the engine lock
    pub fn landmark_sender(&self) -> LandmarkSender {
        self.inner.lock().landmark_sender()
    }

    pub fn resize(&self, viewport: ViewportSize) -> bool {
        self.inner.lock().resize(viewport)
    }

    pub fn set_control_mode(&self, mode: ControlMode) -> ChithraResult<()> {
        self.inner.lock().set_control_mode(mode)
    }

    pub fn toggle_control_mode(&self) -> ChithraResult<ControlMode> {
        self.inner.lock().toggle_control_mode()
    }

    pub fn control_mode(&self) -> ControlMode {
        self.inner.lock().control_mode()
    }

    /// Stop the tracker; see `Engine::shutdown`
    pub fn shutdown(&self) {
        self.inner.lock().shutdown();
    }

    pub fn mood(&self) -> Mood {
        self.inner.lock().mood()
    }

    pub fn stats(&self) -> EngineStats {
        self.inner.lock().stats()
    }
}
