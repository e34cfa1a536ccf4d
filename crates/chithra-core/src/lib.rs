//! Chithra Core - Fundamental types and primitives
//!
//! This crate defines the vocabulary shared by every stage of the creature's
//! behavioral loop:
//! - Time primitives (Timestamp, Smoothing)
//! - Geometry and color (Vec2, Vec3, Color)
//! - Discrete state (Mood, ControlMode, Gesture)
//! - Input records delivered by the host (pointer, landmarks, viewport)

pub mod time;
pub mod geometry;
pub mod smoothing;
pub mod mood;
pub mod input;
pub mod error;

pub use time::*;
pub use geometry::*;
pub use smoothing::*;
pub use mood::*;
pub use input::*;
pub use error::*;
