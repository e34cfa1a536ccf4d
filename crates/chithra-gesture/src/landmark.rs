//! Hand landmark indices
//!
//! The 21-point hand topology emitted by common vision trackers: the wrist,
//! then four joints per digit from base to tip.

use chithra_core::{LandmarkFrame, Vec3};

/// Landmark identifier within a tracked hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandLandmark {
    Wrist = 0,

    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,

    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,

    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,

    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,

    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl HandLandmark {
    /// Array index into a landmark frame
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Tip and proximal-interphalangeal joint of the four non-thumb fingers
    pub fn finger_tips_and_pips() -> [(HandLandmark, HandLandmark); 4] {
        [
            (HandLandmark::IndexTip, HandLandmark::IndexPip),
            (HandLandmark::MiddleTip, HandLandmark::MiddlePip),
            (HandLandmark::RingTip, HandLandmark::RingPip),
            (HandLandmark::PinkyTip, HandLandmark::PinkyPip),
        ]
    }
}

/// Landmark lookup by name
pub trait LandmarkExt {
    fn point(&self, landmark: HandLandmark) -> Vec3;
}

impl LandmarkExt for LandmarkFrame {
    #[inline]
    fn point(&self, landmark: HandLandmark) -> Vec3 {
        self.landmarks[landmark.index()]
    }
}
