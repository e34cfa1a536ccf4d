//! Input records delivered by the host
//!
//! Pointer samples and clicks come from the host's input layer, landmark
//! frames from an external vision tracker. All carry the host timestamp.

use serde::{Deserialize, Serialize};

use crate::{ChithraError, ChithraResult, Timestamp, Vec3};

/// Landmarks per tracked hand
pub const LANDMARK_COUNT: usize = 21;

/// Pointer position sample, screen pixels with top-left origin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub timestamp: Timestamp,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, timestamp: Timestamp) -> Self {
        Self { x, y, timestamp }
    }
}

/// Pointer press, already hit-tested against the creature's bounds by the host
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerClick {
    pub x: f32,
    pub y: f32,
    pub timestamp: Timestamp,
    pub hit_creature: bool,
}

impl PointerClick {
    pub fn on_creature(x: f32, y: f32, timestamp: Timestamp) -> Self {
        Self { x, y, timestamp, hit_creature: true }
    }

    pub fn missed(x: f32, y: f32, timestamp: Timestamp) -> Self {
        Self { x, y, timestamp, hit_creature: false }
    }
}

/// Drawable area in pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// One tracked hand, normalized landmark space (x, y in [0, 1], top-left origin)
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkFrame {
    pub landmarks: [Vec3; LANDMARK_COUNT],
    pub timestamp: Timestamp,
}

impl LandmarkFrame {
    pub fn new(landmarks: [Vec3; LANDMARK_COUNT], timestamp: Timestamp) -> Self {
        Self { landmarks, timestamp }
    }

    /// Build a frame from untrusted tracker output
    ///
    /// The behavioral core assumes well-formed frames; tracker integrations
    /// filter through this before delivery.
    pub fn from_slice(points: &[Vec3], timestamp: Timestamp) -> ChithraResult<Self> {
        if points.len() != LANDMARK_COUNT {
            return Err(ChithraError::LandmarkCount {
                expected: LANDMARK_COUNT,
                actual: points.len(),
            });
        }
        if let Some(idx) = points.iter().position(|p| !p.is_finite()) {
            return Err(ChithraError::NonFiniteLandmark(idx));
        }

        let mut landmarks = [Vec3::ZERO; LANDMARK_COUNT];
        landmarks.copy_from_slice(points);
        Ok(Self { landmarks, timestamp })
    }
}
