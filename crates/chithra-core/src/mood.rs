//! Discrete behavioral state
//!
//! - Mood: what the creature feels, drives every visual output
//! - ControlMode: which input source supplies the movement target
//! - Gesture: categorical hand pose derived from landmark geometry

use serde::{Deserialize, Serialize};

/// Behavioral mood of the creature
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Bored,
    #[default]
    Content,
    Playful,
    Sad,
    Angry,
}

impl Mood {
    /// All moods in declaration order
    pub fn all() -> &'static [Mood] {
        &[Mood::Bored, Mood::Content, Mood::Playful, Mood::Sad, Mood::Angry]
    }

    /// Lowercase identifier
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Bored => "bored",
            Mood::Content => "content",
            Mood::Playful => "playful",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
        }
    }

    /// Capitalized label for on-screen display
    pub fn label(self) -> &'static str {
        match self {
            Mood::Bored => "Bored",
            Mood::Content => "Content",
            Mood::Playful => "Playful",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bored" => Some(Mood::Bored),
            "content" => Some(Mood::Content),
            "playful" => Some(Mood::Playful),
            "sad" => Some(Mood::Sad),
            "angry" => Some(Mood::Angry),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Active input source
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlMode {
    #[default]
    Pointer,
    HandTracking,
}

impl ControlMode {
    /// The other mode, for a toggle control
    pub fn toggled(self) -> Self {
        match self {
            ControlMode::Pointer => ControlMode::HandTracking,
            ControlMode::HandTracking => ControlMode::Pointer,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ControlMode::Pointer => "pointer",
            ControlMode::HandTracking => "hand_tracking",
        }
    }
}

/// Categorical hand gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    Fist,
    Pinch,
    OpenPalm,
    Point,
}

impl Gesture {
    pub fn as_str(self) -> &'static str {
        match self {
            Gesture::Fist => "fist",
            Gesture::Pinch => "pinch",
            Gesture::OpenPalm => "open_palm",
            Gesture::Point => "point",
        }
    }
}
