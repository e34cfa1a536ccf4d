//! Mood colors

use chithra_core::{Color, Mood};

/// Body color at startup
pub const INITIAL_BODY: Color = Color::from_hex(0x32cd32);

/// Eye tint while sad
pub const SAD_EYES: Color = Color::from_hex(0x5555ff);

/// Eye color otherwise
pub const NEUTRAL_EYES: Color = Color::BLACK;

/// Reference body color the creature blends toward in each mood
pub fn body_color(mood: Mood) -> Color {
    match mood {
        Mood::Bored => Color::from_hex(0x646464),
        Mood::Content => Color::from_hex(0x32cd32),
        Mood::Playful => Color::from_hex(0x00ff00),
        Mood::Sad => Color::from_hex(0x464696),
        Mood::Angry => Color::from_hex(0xff3232),
    }
}

/// Eye color the creature blends toward in each mood
pub fn eye_color(mood: Mood) -> Color {
    match mood {
        Mood::Sad => SAD_EYES,
        _ => NEUTRAL_EYES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_palette() {
        assert_eq!(body_color(Mood::Angry).to_hex(), 0xff3232);
        assert_eq!(body_color(Mood::Content), INITIAL_BODY);
        assert_eq!(body_color(Mood::Bored).to_hex(), 0x646464);
    }

    #[test]
    fn test_only_sad_tints_eyes() {
        for mood in Mood::all() {
            let expected = if *mood == Mood::Sad { SAD_EYES } else { NEUTRAL_EYES };
            assert_eq!(eye_color(*mood), expected);
        }
    }
}
