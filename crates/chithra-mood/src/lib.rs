//! Chithra Mood - Discrete mood from input history and timers
//!
//! Each tick the machine evaluates an ordered rule table top to bottom and
//! the first matching rule decides the next mood:
//! 1. Click burst (explicit poke)
//! 2. Accepted hand gesture
//! 3. Hand-tracking hold (no passive decay while the tracker drives input)
//! 4. Angry cooldown
//! 5. Playful timeout
//! 6. Idle ladder (always matches)

pub mod config;
pub mod rules;
pub mod machine;

pub use config::*;
pub use rules::*;
pub use machine::*;
