//! Headless terrarium
//!
//! Runs the engine at its nominal rate with a synthetic pointer: a few
//! seconds of circling, a poke burst, then stillness so the idle ladder
//! plays out. Mood changes are logged; the final frame is printed as JSON.
//!
//! Usage: terrarium [seconds] [config.json]

use std::f32::consts::TAU;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::info;

use chithra_core::{ChithraResult, Mood, PointerClick, PointerSample};
use chithra_pose::Frame;
use chithra_runtime::{
    ask, init_tracing, run_loop, Clock, CompanionBackend, CompanionGate, Engine, EngineConfig,
    NullTracker, SharedEngine, SystemClock,
};

/// Offline stand-in for a text service
struct CannedBackend;

impl CompanionBackend for CannedBackend {
    fn generate(&self, prompt: &str) -> impl std::future::Future<Output = ChithraResult<Option<String>>> + Send {
        let reply = if prompt.contains("gecko") {
            "Geckos can lick their own eyeballs to keep them clean."
        } else {
            "Bask on a warm rock and chase a cricket."
        };
        async move { Ok(Some(reply.to_string())) }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("terrarium=info,chithra_runtime=info")?;

    let args: Vec<String> = std::env::args().collect();
    let seconds: u64 = match args.get(1) {
        Some(s) => s.parse()?,
        None => 20,
    };
    let config = match args.get(2) {
        Some(path) => EngineConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => EngineConfig::default(),
    };

    let clock = SystemClock::new();
    let engine = SharedEngine::new(Engine::new(config.clone(), NullTracker::default(), clock.now())?);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let final_frame = Arc::new(Mutex::new(None::<Frame>));
    let sink = {
        let final_frame = final_frame.clone();
        let mut last_mood = Mood::Content;
        move |frame: &Frame| {
            if frame.mood != last_mood {
                info!(from = last_mood.label(), to = frame.mood_label(), "creature mood");
                last_mood = frame.mood;
            }
            *final_frame.lock() = Some(frame.clone());
        }
    };
    let ticker = tokio::spawn(run_loop(engine.clone(), clock.clone(), sink, shutdown_rx));

    let viewport = config.viewport;
    let (cx, cy) = viewport.center();
    let started = clock.now();
    let mut pokes = 0;
    let mut step = tokio::time::interval(Duration::from_millis(30));

    while clock.now().since(started) < Duration::from_secs(seconds) {
        step.tick().await;
        let now = clock.now();
        let elapsed = now.since(started).as_secs_f32();

        if elapsed < 4.0 {
            let angle = elapsed * TAU;
            let radius = viewport.height * 0.4;
            engine.pointer_moved(&PointerSample::new(
                cx + angle.cos() * radius,
                cy + angle.sin() * radius,
                now,
            ));
        } else if elapsed > 6.0 && pokes < 3 {
            engine.pointer_clicked(&PointerClick::on_creature(cx, cy, now));
            pokes += 1;
        }
    }

    let gate = CompanionGate::new();
    if let Some(reply) = ask(&CannedBackend, &gate, engine.mood(), config.companion).await {
        info!(reply = reply.text(), "companion");
    }

    shutdown_tx.send(true)?;
    let stats = ticker.await?;
    info!(
        ticks = stats.ticks,
        mood_changes = stats.mood_changes,
        "terrarium closed"
    );

    if let Some(frame) = final_frame.lock().as_ref() {
        println!("{}", serde_json::to_string_pretty(frame)?);
    }
    Ok(())
}
