//! Random wander target while angry
//!
//! Every `interval` the creature picks a new uniformly random point in the
//! cube [-extent, extent]^3 and storms toward it.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use chithra_core::{Timestamp, Vec3};

/// Angry-mode movement target
#[derive(Debug, Clone)]
pub struct WanderTarget {
    target: Vec3,
    last_change: Timestamp,
    interval: Duration,
    extent: f32,
    rng: StdRng,
}

impl WanderTarget {
    /// Start at the origin; the first pick happens once `interval` has passed
    pub fn new(interval: Duration, extent: f32, seed: Option<u64>, now: Timestamp) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            target: Vec3::ZERO,
            last_change: now,
            interval,
            extent,
            rng,
        }
    }

    /// Current target, re-rolled if the interval has elapsed
    pub fn update(&mut self, now: Timestamp) -> Vec3 {
        if now.since(self.last_change) > self.interval {
            let e = self.extent;
            self.target = Vec3::new(
                self.rng.gen_range(-e..=e),
                self.rng.gen_range(-e..=e),
                self.rng.gen_range(-e..=e),
            );
            self.last_change = now;
            trace!(x = self.target.x, y = self.target.y, z = self.target.z, "wander target");
        }
        self.target
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn last_change(&self) -> Timestamp {
        self.last_change
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: i64) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    #[test]
    fn test_holds_until_interval_passes() {
        let mut wander = WanderTarget::new(Duration::from_millis(2000), 25.0, Some(7), at(0));
        assert_eq!(wander.update(at(2000)), Vec3::ZERO);

        let picked = wander.update(at(2001));
        assert_ne!(picked, Vec3::ZERO);
        assert_eq!(wander.update(at(3000)), picked);
        assert_eq!(wander.last_change(), at(2001));
    }

    #[test]
    fn test_targets_stay_in_cube() {
        let mut wander = WanderTarget::new(Duration::from_millis(10), 25.0, Some(42), at(0));
        for i in 1..200 {
            let t = wander.update(at(i * 11));
            for c in [t.x, t.y, t.z] {
                assert!((-25.0..=25.0).contains(&c));
            }
        }
    }

    #[test]
    fn test_seeded_wander_is_reproducible() {
        let mut a = WanderTarget::new(Duration::from_millis(10), 25.0, Some(99), at(0));
        let mut b = WanderTarget::new(Duration::from_millis(10), 25.0, Some(99), at(0));
        assert_eq!(a.update(at(50)), b.update(at(50)));
    }
}
