//! Chithra Pose - Mood rendered into continuous pose and color
//!
//! This is NOT a renderer. It produces the values a renderer needs each
//! frame: where the head and trailing body segments are, how limbs and face
//! are posed, and what colors the body and eyes currently blend through.
//!
//! All blends are exponential and time-scaled, so nothing snaps except the
//! facial lookup and the limb poses, which are set directly per mood.

pub mod palette;
pub mod expression;
pub mod limbs;
pub mod layout;
pub mod wander;
pub mod driver;

pub use palette::*;
pub use expression::*;
pub use limbs::*;
pub use layout::*;
pub use wander::*;
pub use driver::*;
