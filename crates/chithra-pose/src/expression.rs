//! Facial expression lookup
//!
//! Mouth curvature is the mouth arc's rotation about z: -π/2 opens upward
//! (smile), +π/2 downward (frown). Eyebrows are only shown for Sad and Angry.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_8};

use chithra_core::{Mood, Vec3};

pub const SMILE_ROTATION_Z: f32 = -FRAC_PI_2;
pub const FROWN_ROTATION_Z: f32 = FRAC_PI_2;

/// Target facial configuration for a mood
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceExpression {
    pub mouth_rotation_z: f32,
    pub mouth_scale: Vec3,
    /// Left/right eyebrow tilt about z, `None` when eyebrows are hidden
    pub eyebrow_tilt: Option<[f32; 2]>,
}

impl FaceExpression {
    pub fn for_mood(mood: Mood) -> Self {
        match mood {
            Mood::Content | Mood::Playful => FaceExpression {
                mouth_rotation_z: SMILE_ROTATION_Z,
                mouth_scale: Vec3::ONE,
                eyebrow_tilt: None,
            },
            // Inward brows
            Mood::Sad => FaceExpression {
                mouth_rotation_z: FROWN_ROTATION_Z,
                mouth_scale: Vec3::new(0.7, 1.0, 1.0),
                eyebrow_tilt: Some([-FRAC_PI_8, FRAC_PI_8]),
            },
            // Outward brows
            Mood::Angry => FaceExpression {
                mouth_rotation_z: FROWN_ROTATION_Z,
                mouth_scale: Vec3::new(1.0, 0.7, 1.0),
                eyebrow_tilt: Some([FRAC_PI_8, -FRAC_PI_8]),
            },
            // Flattened mouth
            Mood::Bored => FaceExpression {
                mouth_rotation_z: SMILE_ROTATION_Z,
                mouth_scale: Vec3::new(1.0, 0.1, 1.0),
                eyebrow_tilt: None,
            },
        }
    }

    pub fn eyebrows_visible(&self) -> bool {
        self.eyebrow_tilt.is_some()
    }
}
