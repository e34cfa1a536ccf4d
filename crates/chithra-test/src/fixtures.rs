//! Landmark fixtures
//!
//! Frames are built in normalized camera space (y grows downward). Finger
//! joints sit on a fixed grid and every point gets a small seeded jitter
//! that never crosses a classification boundary.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use chithra_core::{LandmarkFrame, Timestamp, Vec3, LANDMARK_COUNT};
use chithra_gesture::HandLandmark;

const PIP_Y: f32 = 0.5;
const TIP_UP_Y: f32 = 0.3;
const TIP_DOWN_Y: f32 = 0.7;
const ANCHOR_X: f32 = 0.5;
/// Index, middle, ring, pinky columns
const FINGER_X: [f32; 4] = [0.45, 0.5, 0.55, 0.6];
const MAX_JITTER: f32 = 0.01;

/// Hand poses the fixtures can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandShape {
    Fist,
    Pinch,
    OpenPalm,
    Point,
}

impl HandShape {
    pub fn all() -> [HandShape; 4] {
        [HandShape::Fist, HandShape::Pinch, HandShape::OpenPalm, HandShape::Point]
    }
}

/// Seeded frame generator
#[derive(Debug)]
pub struct LandmarkFixture {
    rng: StdRng,
    jitter: f32,
}

impl LandmarkFixture {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            jitter: MAX_JITTER,
        }
    }

    /// Exact grid positions, no jitter
    pub fn exact() -> Self {
        Self {
            rng: StdRng::seed_from_u64(0),
            jitter: 0.0,
        }
    }

    pub fn frame(&mut self, shape: HandShape, at: Timestamp) -> LandmarkFrame {
        let (fingers_up, thumb_tip, index_tip) = match shape {
            HandShape::Fist => ([false; 4], Vec3::new(0.35, 0.55, 0.0), None),
            HandShape::Pinch => (
                [false, true, true, true],
                Vec3::new(0.57, 0.41, 0.0),
                Some(Vec3::new(0.55, 0.4, 0.0)),
            ),
            HandShape::OpenPalm => ([true; 4], Vec3::new(0.75, 0.45, 0.0), None),
            HandShape::Point => ([true, false, false, false], Vec3::new(0.7, 0.55, 0.0), None),
        };

        let mut points = [Vec3::new(ANCHOR_X, 0.6, 0.0); LANDMARK_COUNT];
        points[HandLandmark::Wrist.index()] = Vec3::new(ANCHOR_X, 0.8, 0.0);
        for (finger, &(tip, pip)) in HandLandmark::finger_tips_and_pips().iter().enumerate() {
            let x = FINGER_X[finger];
            let tip_y = if fingers_up[finger] { TIP_UP_Y } else { TIP_DOWN_Y };
            points[tip.index()] = Vec3::new(x, tip_y, 0.0);
            points[pip.index()] = Vec3::new(x, PIP_Y, 0.0);
        }
        if let Some(index_tip) = index_tip {
            points[HandLandmark::IndexTip.index()] = index_tip;
        }
        points[HandLandmark::ThumbTip.index()] = thumb_tip;

        for point in points.iter_mut() {
            *point = self.jittered(*point);
        }
        LandmarkFrame::new(points, at)
    }

    fn jittered(&mut self, p: Vec3) -> Vec3 {
        if self.jitter == 0.0 {
            return p;
        }
        let j = self.jitter;
        Vec3::new(
            p.x + self.rng.gen_range(-j..=j),
            p.y + self.rng.gen_range(-j..=j),
            p.z + self.rng.gen_range(-j..=j),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chithra_core::Gesture;
    use chithra_gesture::{classify, GestureConfig};

    fn expected(shape: HandShape) -> Gesture {
        match shape {
            HandShape::Fist => Gesture::Fist,
            HandShape::Pinch => Gesture::Pinch,
            HandShape::OpenPalm => Gesture::OpenPalm,
            HandShape::Point => Gesture::Point,
        }
    }

    #[test]
    fn test_fixtures_classify_as_named() {
        let config = GestureConfig::default();
        let mut fixture = LandmarkFixture::new(42);
        for _ in 0..50 {
            for shape in HandShape::all() {
                let frame = fixture.frame(shape, Timestamp::ZERO);
                assert_eq!(classify(&frame, &config), expected(shape), "{shape:?}");
            }
        }
    }

    #[test]
    fn test_same_seed_same_frames() {
        let a = LandmarkFixture::new(9).frame(HandShape::Pinch, Timestamp::ZERO);
        let b = LandmarkFixture::new(9).frame(HandShape::Pinch, Timestamp::ZERO);
        assert_eq!(a, b);
    }
}
