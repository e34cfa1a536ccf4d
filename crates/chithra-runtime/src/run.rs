//! Fixed-rate async tick loop

use tokio::sync::watch;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::{Clock, EngineStats, HandTracker, PoseSink, SharedEngine};

/// Tick the engine at its nominal rate until `shutdown` turns true
///
/// Late ticks are skipped rather than bunched; the next tick simply sees a
/// longer interval. The tracker is stopped before returning.
pub async fn run_loop<T, C, S>(
    engine: SharedEngine<T>,
    clock: C,
    mut sink: S,
    mut shutdown: watch::Receiver<bool>,
) -> EngineStats
where
    T: HandTracker,
    C: Clock,
    S: PoseSink,
{
    let period = engine.lock().config().driver.nominal_tick();
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    info!(period_us = period.as_micros() as u64, "tick loop started");

    loop {
        if *shutdown.borrow() {
            break;
        }
        tokio::select! {
            _ = ticker.tick() => {
                let frame = engine.tick(clock.now());
                sink.present(&frame);
            }
            changed = shutdown.changed() => {
                if changed.is_err() {
                    debug!("shutdown sender dropped");
                    break;
                }
            }
        }
    }

    let mut guard = engine.lock();
    guard.shutdown();
    let stats = guard.stats();
    info!(ticks = stats.ticks, mood_changes = stats.mood_changes, "tick loop stopped");
    stats
}
