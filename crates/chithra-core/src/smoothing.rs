//! Frame-rate independent exponential smoothing
//!
//! Blend factors are per-frame constants tuned for a nominal
//! render cadence. `Smoothing` keeps that constant and rescales it by the real
//! time elapsed between ticks, so the same real-time convergence holds at any
//! tick rate.

use std::time::Duration;

/// Nominal render cadence the per-tick factors were tuned for
pub const NOMINAL_TICK: Duration = Duration::from_micros(16_667);

/// Largest gap between ticks fed into a blend (e.g. after a host stall)
pub const MAX_TICK_GAP: Duration = Duration::from_millis(100);

/// Per-tick lerp factor with time rescaling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothing {
    /// Blend factor applied once per nominal tick, in (0, 1]
    pub per_tick: f32,
    /// Tick length `per_tick` was tuned for
    pub nominal: Duration,
}

impl Smoothing {
    pub fn new(per_tick: f32, nominal: Duration) -> Self {
        Self { per_tick, nominal }
    }

    /// Smoothing tuned for the default nominal cadence
    pub fn per_nominal_tick(per_tick: f32) -> Self {
        Self::new(per_tick, NOMINAL_TICK)
    }

    /// Blend factor to apply for a tick that covered `dt`
    ///
    /// `1 - (1 - k)^(dt / nominal)`; equals `per_tick` when `dt == nominal`.
    pub fn factor(&self, dt: Duration) -> f32 {
        let dt = dt.min(MAX_TICK_GAP);
        if dt.is_zero() || self.nominal.is_zero() {
            return 0.0;
        }
        let k = self.per_tick.clamp(0.0, 1.0) as f64;
        if k >= 1.0 {
            return 1.0;
        }
        let ticks = dt.as_secs_f64() / self.nominal.as_secs_f64();
        (1.0 - (1.0 - k).powf(ticks)) as f32
    }
}
