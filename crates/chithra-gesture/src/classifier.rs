//! Gesture classification from a single landmark frame
//!
//! Precedence is fixed: Fist, then Pinch, then OpenPalm, else Point.
//! Vertical comparisons assume a top-left origin, so "below" is numerically
//! greater.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use chithra_core::{Gesture, LandmarkFrame};

use crate::{HandLandmark, LandmarkExt};

/// Landmark the thumb tip is compared against for a closed fist
pub const THUMB_ANCHOR: HandLandmark = HandLandmark::ThumbMcp;

/// Classification and debounce thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Maximum thumb-tip to index-tip distance for a pinch, normalized units
    pub pinch_threshold: f32,
    /// Minimum gap between accepted gestures
    pub debounce_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: 0.08,
            debounce_ms: 500,
        }
    }
}

impl GestureConfig {
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// All four fingertips below their PIP joints and the thumb folded across the palm
pub fn is_fist(frame: &LandmarkFrame) -> bool {
    let fingers_curled = HandLandmark::finger_tips_and_pips()
        .iter()
        .all(|&(tip, pip)| frame.point(tip).y > frame.point(pip).y);

    fingers_curled && frame.point(HandLandmark::ThumbTip).x < frame.point(THUMB_ANCHOR).x
}

/// All four fingertips above their PIP joints
pub fn is_open_palm(frame: &LandmarkFrame) -> bool {
    HandLandmark::finger_tips_and_pips()
        .iter()
        .all(|&(tip, pip)| frame.point(tip).y < frame.point(pip).y)
}

/// Euclidean distance between index and thumb tips
pub fn pinch_distance(frame: &LandmarkFrame) -> f32 {
    frame
        .point(HandLandmark::IndexTip)
        .distance(&frame.point(HandLandmark::ThumbTip))
}

/// Classify a frame into exactly one gesture
pub fn classify(frame: &LandmarkFrame, config: &GestureConfig) -> Gesture {
    if is_fist(frame) {
        Gesture::Fist
    } else if pinch_distance(frame) < config.pinch_threshold {
        Gesture::Pinch
    } else if is_open_palm(frame) {
        Gesture::OpenPalm
    } else {
        Gesture::Point
    }
}
