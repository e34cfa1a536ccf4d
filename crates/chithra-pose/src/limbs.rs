//! Limb poses by mood
//!
//! Rotations are Euler angles (x, y, z) in radians. `phase` is the shared
//! animation clock, `now_ms * 0.01`.

use std::f32::consts::FRAC_PI_2;

use chithra_core::{Mood, Vec3};

use crate::{leg_rest_z, LEG_OFFSETS};

/// Arm and leg rotations, left then right
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimbPose {
    pub arms: [Vec3; 2],
    pub legs: [Vec3; 2],
}

impl LimbPose {
    /// Arms down, legs at their resting splay
    pub fn resting() -> Self {
        Self {
            arms: [Vec3::ZERO; 2],
            legs: LEG_OFFSETS.map(|offset| Vec3::new(0.0, 0.0, leg_rest_z(offset))),
        }
    }

    pub fn for_mood(mood: Mood, phase: f32) -> Self {
        let rest = Self::resting();
        match mood {
            // Arms wave twice as fast as the legs kick
            Mood::Playful => Self {
                arms: [Vec3::new(0.0, 0.0, (phase * 2.0).sin()); 2],
                legs: rest.legs.map(|leg| Vec3::new(phase.sin(), 0.0, leg.z)),
            },
            // Arms thrown forward
            Mood::Angry => Self {
                arms: [Vec3::new(-FRAC_PI_2, 0.0, 0.0); 2],
                legs: rest.legs,
            },
            _ => rest,
        }
    }
}
