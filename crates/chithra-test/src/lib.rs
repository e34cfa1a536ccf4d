//! Chithra Test - Harness for exercising the engine end to end
//!
//! - Landmark fixtures for each hand shape, with seeded jitter
//! - A tracker that can be told to fail
//! - Scripted scenarios replayed against an engine on a fixed tick grid
//! - Property tests over classifier, debouncer and mood machine

pub mod fixtures;
pub mod tracker;
pub mod scenario;

#[cfg(test)]
mod properties;

pub use fixtures::*;
pub use tracker::*;
pub use scenario::*;
