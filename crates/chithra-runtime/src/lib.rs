//! Chithra Runtime - The behavioral loop
//!
//! One tick runs four stages in order:
//! 1. Drain landmark frames delivered by the tracker
//! 2. Sample fused input (target, speed, idle time, clicks, gesture)
//! 3. Advance the mood machine
//! 4. Drive pose and color, hand the frame to the renderer
//!
//! Everything is single-threaded inside the engine. Hosts that tick from
//! several threads go through `SharedEngine`.

pub mod config;
pub mod clock;
pub mod tracker;
pub mod sink;
pub mod mailbox;
pub mod engine;
pub mod shared;
pub mod run;
pub mod companion;
pub mod logging;

pub use config::*;
pub use clock::*;
pub use tracker::*;
pub use sink::*;
pub use mailbox::*;
pub use engine::*;
pub use shared::*;
pub use run::*;
pub use companion::*;
pub use logging::*;
