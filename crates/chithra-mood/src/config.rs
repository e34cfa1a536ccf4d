//! Mood timing and speed thresholds

use std::time::Duration;

use serde::{Deserialize, Serialize};

use chithra_core::{ChithraError, ChithraResult};

/// Mood machine configuration
///
/// The defaults encode tuned behavior and should not drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodConfig {
    /// Pointer speed below which an angry creature calms early
    pub calm_speed: f32,
    /// Angry time after which calm input ends the anger
    pub angry_calm_ms: u64,
    /// Angry time after which anger ends regardless of input
    pub angry_max_ms: u64,
    /// Idle time after which play ends
    pub playful_idle_ms: u64,
    /// Pointer speed that makes the creature playful
    pub playful_speed: f32,
    /// Idle time before boredom
    pub bored_idle_ms: u64,
    /// Idle time before sadness
    pub sad_idle_ms: u64,
    /// Idle time before neglect turns to anger
    pub angry_idle_ms: u64,
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            calm_speed: 5.0,
            angry_calm_ms: 3000,
            angry_max_ms: 10_000,
            playful_idle_ms: 5000,
            playful_speed: 50.0,
            bored_idle_ms: 3000,
            sad_idle_ms: 10_000,
            angry_idle_ms: 15_000,
        }
    }
}

impl MoodConfig {
    pub fn angry_calm(&self) -> Duration {
        Duration::from_millis(self.angry_calm_ms)
    }

    pub fn angry_max(&self) -> Duration {
        Duration::from_millis(self.angry_max_ms)
    }

    pub fn playful_idle(&self) -> Duration {
        Duration::from_millis(self.playful_idle_ms)
    }

    pub fn bored_idle(&self) -> Duration {
        Duration::from_millis(self.bored_idle_ms)
    }

    pub fn sad_idle(&self) -> Duration {
        Duration::from_millis(self.sad_idle_ms)
    }

    pub fn angry_idle(&self) -> Duration {
        Duration::from_millis(self.angry_idle_ms)
    }

    /// Check the idle ladder is strictly increasing
    pub fn validate(&self) -> ChithraResult<()> {
        if !(self.bored_idle_ms < self.sad_idle_ms && self.sad_idle_ms < self.angry_idle_ms) {
            return Err(ChithraError::InvalidConfig("idle thresholds must satisfy bored < sad < angry".into()));
        }
        if self.angry_calm_ms > self.angry_max_ms {
            return Err(ChithraError::InvalidConfig("angry_calm_ms must not exceed angry_max_ms".into()));
        }
        if !(self.calm_speed >= 0.0 && self.playful_speed >= 0.0) {
            return Err(ChithraError::InvalidConfig("speed thresholds must be non-negative".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(MoodConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unordered_ladder_rejected() {
        let config = MoodConfig {
            sad_idle_ms: 2000,
            ..MoodConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
