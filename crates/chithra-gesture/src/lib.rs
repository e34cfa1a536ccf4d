//! Chithra Gesture - Categorical hand poses from landmark geometry
//!
//! A landmark frame is classified into exactly one `Gesture` with a fixed
//! precedence (Fist, Pinch, OpenPalm, Point). The debouncer then decides
//! whether the classified gesture is allowed to reach the mood machine.

pub mod landmark;
pub mod classifier;
pub mod debounce;

pub use landmark::*;
pub use classifier::*;
pub use debounce::*;
