//! Screen and landmark space to scene space
//!
//! Both sources map onto the square [-extent, extent] with +y up. Pointer
//! coordinates are pixels; landmark coordinates are normalized and mirrored
//! horizontally so the creature follows the hand as seen in a selfie view.

use chithra_core::{Vec3, ViewportSize};

/// Project a pointer position into the scene plane z = 0
#[inline]
pub fn pointer_to_scene(x: f32, y: f32, viewport: &ViewportSize, extent: f32) -> Vec3 {
    let span = extent * 2.0;
    Vec3::new(
        (x / viewport.width) * span - extent,
        -(y / viewport.height) * span + extent,
        0.0,
    )
}

/// Project a normalized landmark position into the scene plane z = 0
#[inline]
pub fn landmark_to_scene(x: f32, y: f32, extent: f32) -> Vec3 {
    let span = extent * 2.0;
    Vec3::new((1.0 - x) * span - extent, -y * span + extent, 0.0)
}
