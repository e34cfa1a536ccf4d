//! Click burst detection
//!
//! Rapid clicks on the creature chain into a burst while each lands within
//! `gap` of the previous one. A burst that reaches `threshold` clicks within
//! `window` of its first click is a deliberate poke.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use chithra_core::Timestamp;

/// Burst thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClickBurstConfig {
    /// Maximum gap between chained clicks (inclusive)
    pub gap_ms: u64,
    /// Window after the first click in which the burst must complete
    pub window_ms: u64,
    /// Clicks needed to trigger
    pub threshold: u32,
}

impl Default for ClickBurstConfig {
    fn default() -> Self {
        Self {
            gap_ms: 500,
            window_ms: 1500,
            threshold: 3,
        }
    }
}

/// Rolling click counter
#[derive(Debug, Clone)]
pub struct ClickBurst {
    config: ClickBurstConfig,
    count: u32,
    first_click: Option<Timestamp>,
    last_click: Option<Timestamp>,
}

impl ClickBurst {
    pub fn new(config: ClickBurstConfig) -> Self {
        Self {
            config,
            count: 0,
            first_click: None,
            last_click: None,
        }
    }

    /// Record a click on the creature, returns the updated count
    pub fn register(&mut self, now: Timestamp) -> u32 {
        let chained = self
            .last_click
            .map(|last| now.since(last) <= Duration::from_millis(self.config.gap_ms))
            .unwrap_or(false);

        if chained && self.count > 0 {
            self.count += 1;
        } else {
            self.count = 1;
            self.first_click = Some(now);
        }
        self.last_click = Some(now);
        self.count
    }

    /// Has the burst reached its threshold in time?
    pub fn is_triggered(&self, now: Timestamp) -> bool {
        if self.count < self.config.threshold {
            return false;
        }
        self.first_click
            .map(|first| now.since(first) < Duration::from_millis(self.config.window_ms))
            .unwrap_or(false)
    }

    /// Clear the burst after it has been acted on
    pub fn reset(&mut self) {
        self.count = 0;
        self.first_click = None;
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn last_click(&self) -> Option<Timestamp> {
        self.last_click
    }
}

impl Default for ClickBurst {
    fn default() -> Self {
        Self::new(ClickBurstConfig::default())
    }
}
