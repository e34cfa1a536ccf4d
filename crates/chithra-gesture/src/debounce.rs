//! Gesture debouncing
//!
//! A classified gesture only counts once at least `window` has passed since
//! the last accepted one. Every accepted gesture refreshes the window,
//! including `Point`, which carries no mood effect of its own.

use std::time::Duration;

use tracing::debug;

use chithra_core::{Gesture, Timestamp};

use crate::GestureConfig;

/// Debounce gate for classified gestures
#[derive(Debug, Clone)]
pub struct GestureDebouncer {
    window: Duration,
    last_accepted: Option<Timestamp>,
    accepted: u64,
    dropped: u64,
}

impl GestureDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: None,
            accepted: 0,
            dropped: 0,
        }
    }

    /// Offer a gesture observed at `now`; returns it if accepted
    pub fn offer(&mut self, gesture: Gesture, now: Timestamp) -> Option<Gesture> {
        if let Some(last) = self.last_accepted {
            if now.since(last) < self.window {
                self.dropped += 1;
                debug!(
                    gesture = gesture.as_str(),
                    since_last_ms = now.since(last).as_millis() as u64,
                    "gesture debounced"
                );
                return None;
            }
        }

        self.last_accepted = Some(now);
        self.accepted += 1;
        Some(gesture)
    }

    /// Time of the last accepted gesture
    pub fn last_accepted(&self) -> Option<Timestamp> {
        self.last_accepted
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn accepted_count(&self) -> u64 {
        self.accepted
    }

    pub fn dropped_count(&self) -> u64 {
        self.dropped
    }
}

impl Default for GestureDebouncer {
    fn default() -> Self {
        Self::new(GestureConfig::default().debounce_window())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: i64) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    #[test]
    fn test_first_gesture_always_accepted() {
        let mut debouncer = GestureDebouncer::default();
        assert_eq!(debouncer.offer(Gesture::Pinch, at(0)), Some(Gesture::Pinch));
        assert_eq!(debouncer.last_accepted(), Some(at(0)));
    }

    #[test]
    fn test_gesture_inside_window_dropped() {
        let mut debouncer = GestureDebouncer::default();
        debouncer.offer(Gesture::Pinch, at(1000));

        assert_eq!(debouncer.offer(Gesture::Fist, at(1499)), None);
        assert_eq!(debouncer.dropped_count(), 1);
        // Dropped gestures do not extend the window
        assert_eq!(debouncer.last_accepted(), Some(at(1000)));
    }

    #[test]
    fn test_gesture_at_window_boundary_accepted() {
        let mut debouncer = GestureDebouncer::default();
        debouncer.offer(Gesture::Pinch, at(1000));
        assert_eq!(debouncer.offer(Gesture::Fist, at(1500)), Some(Gesture::Fist));
    }

    #[test]
    fn test_point_refreshes_window() {
        let mut debouncer = GestureDebouncer::default();
        debouncer.offer(Gesture::Point, at(0));
        assert_eq!(debouncer.offer(Gesture::Fist, at(300)), None);
        assert_eq!(debouncer.accepted_count(), 1);
    }
}
