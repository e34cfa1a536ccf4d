//! Rest layout of the body chain
//!
//! The head is a sphere of radius 2 at the origin. Segments hang below it,
//! each smaller than the last, separated by a 0.5 gap. Legs attach to the
//! second segment.

use std::f32::consts::FRAC_PI_8;

use chithra_core::Vec3;

pub const HEAD_RADIUS: f32 = 2.0;
pub const SEGMENT_GAP: f32 = 0.5;

/// Leg mount offsets on segment 1 (left, right)
pub const LEG_OFFSETS: [Vec3; 2] = [Vec3::new(-1.2, -1.0, 0.0), Vec3::new(1.2, -1.0, 0.0)];

/// Resting splay of a leg about z; legs angle away from the body's midline
pub fn leg_rest_z(offset: Vec3) -> f32 {
    if offset.x > 0.0 {
        -FRAC_PI_8
    } else {
        FRAC_PI_8
    }
}

/// Radius of segment `i` of `count`
pub fn segment_radius(i: usize, count: usize) -> f32 {
    1.0 - (i as f32 / count as f32) * 0.5
}

/// Initial positions of the whole chain, head first
pub fn rest_positions(segment_count: usize) -> Vec<Vec3> {
    let mut positions = Vec::with_capacity(segment_count + 1);
    positions.push(Vec3::ZERO);

    let mut prev_y = 0.0;
    let mut prev_radius = HEAD_RADIUS;
    for i in 0..segment_count {
        let radius = segment_radius(i, segment_count);
        let y = prev_y - (prev_radius + radius + SEGMENT_GAP);
        positions.push(Vec3::new(0.0, y, 0.0));
        prev_y = y;
        prev_radius = radius;
    }
    positions
}
