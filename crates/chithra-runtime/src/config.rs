//! Engine configuration
//!
//! Defaults carry the tuned constants. A JSON document may override any
//! subset; omitted fields keep their defaults.

use serde::{Deserialize, Serialize};

use chithra_core::{ChithraError, ChithraResult, ViewportSize};
use chithra_gesture::GestureConfig;
use chithra_input::InputConfig;
use chithra_mood::MoodConfig;
use chithra_pose::DriverConfig;

use crate::{RetryPolicy, TrackerFailurePolicy};

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub input: InputConfig,
    pub gesture: GestureConfig,
    pub mood: MoodConfig,
    pub driver: DriverConfig,
    pub tracker_failure: TrackerFailurePolicy,
    /// Viewport assumed until the host reports one
    pub viewport: ViewportSize,
    /// Landmark frames buffered between ticks
    pub mailbox_capacity: usize,
    /// Retry schedule for companion requests
    pub companion: RetryPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            gesture: GestureConfig::default(),
            mood: MoodConfig::default(),
            driver: DriverConfig::default(),
            tracker_failure: TrackerFailurePolicy::default(),
            viewport: ViewportSize::default(),
            mailbox_capacity: 32,
            companion: RetryPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Deterministic wandering, for simulations and tests
    pub fn seeded(seed: u64) -> Self {
        let mut config = Self::default();
        config.driver.seed = Some(seed);
        config
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> ChithraResult<Self> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| ChithraError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ChithraResult<()> {
        self.mood.validate()?;

        let unit = |name: &str, v: f32| {
            if v > 0.0 && v <= 1.0 {
                Ok(())
            } else {
                Err(invalid(format!("{name} must be in (0, 1], got {v}")))
            }
        };
        unit("driver.head_follow", self.driver.head_follow)?;
        unit("driver.segment_follow", self.driver.segment_follow)?;
        unit("driver.body_color_blend", self.driver.body_color_blend)?;
        unit("driver.eye_color_blend", self.driver.eye_color_blend)?;

        if self.driver.nominal_tick_us == 0 {
            return Err(invalid("driver.nominal_tick_us must be positive".into()));
        }
        if self.driver.segment_count == 0 {
            return Err(invalid("driver.segment_count must be positive".into()));
        }
        if self.driver.wander_interval_ms == 0 || !(self.driver.wander_extent > 0.0) {
            return Err(invalid("driver wander interval and extent must be positive".into()));
        }
        if !(self.gesture.pinch_threshold > 0.0) || self.gesture.debounce_ms == 0 {
            return Err(invalid("gesture thresholds must be positive".into()));
        }
        if !(self.input.scene_extent > 0.0) {
            return Err(invalid("input.scene_extent must be positive".into()));
        }
        let burst = &self.input.click_burst;
        if burst.threshold == 0 || burst.gap_ms == 0 || burst.window_ms == 0 {
            return Err(invalid("click burst thresholds must be positive".into()));
        }
        if !(self.viewport.width > 0.0 && self.viewport.height > 0.0) {
            return Err(invalid("viewport must have a positive size".into()));
        }
        if self.mailbox_capacity == 0 {
            return Err(invalid("mailbox_capacity must be positive".into()));
        }
        if self.companion.max_attempts == 0 {
            return Err(invalid("companion.max_attempts must be positive".into()));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> ChithraError {
    ChithraError::InvalidConfig(msg)
}
