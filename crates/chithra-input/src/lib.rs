//! Chithra Input - One movement target regardless of the input source
//!
//! Pointer samples and hand landmark frames are projected into the same scene
//! range. Clicks on the creature feed a burst counter independent of the
//! active control mode. Landmark frames are classified and debounced here so
//! the mood machine only ever sees accepted gestures.

pub mod projection;
pub mod click;
pub mod fusion;

pub use projection::*;
pub use click::*;
pub use fusion::*;
