use serde::{Deserialize, Serialize};

use crate::error::MazeError;

/// Classification of a sampled pixel. Only exact RGB matches count; alpha is ignored.
/// Serialized as its discriminant so records stay compatible with existing solution files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Color {
    #[default]
    Other = 0,
    White = 1,
    Black = 2,
    Red = 3,
    Blue = 4,
}

impl Color {
    /// A wall field is a passage only if it is exactly white.
    pub fn is_open(self) -> bool {
        self == Color::White
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> u8 {
        color as u8
    }
}

impl TryFrom<u8> for Color {
    type Error = MazeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Color::Other),
            1 => Ok(Color::White),
            2 => Ok(Color::Black),
            3 => Ok(Color::Red),
            4 => Ok(Color::Blue),
            v => Err(MazeError::InvalidColor(v)),
        }
    }
}

pub fn pixel_to_color(r: u8, g: u8, b: u8) -> Color {
    match (r, g, b) {
        (255, 255, 255) => Color::White,
        (0, 0, 0) => Color::Black,
        (255, 0, 0) => Color::Red,
        (0, 0, 255) => Color::Blue,
        _ => Color::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_matches() {
        assert_eq!(pixel_to_color(255, 255, 255), Color::White);
        assert_eq!(pixel_to_color(0, 0, 0), Color::Black);
        assert_eq!(pixel_to_color(255, 0, 0), Color::Red);
        assert_eq!(pixel_to_color(0, 0, 255), Color::Blue);
    }

    #[test]
    fn near_matches_are_other() {
        for (r, g, b) in [
            (254, 255, 255),
            (255, 254, 255),
            (1, 0, 0),
            (255, 0, 1),
            (0, 1, 255),
            (0, 0, 254),
            (0, 255, 0),
            (128, 128, 128),
        ] {
            assert_eq!(pixel_to_color(r, g, b), Color::Other, "({r}, {g}, {b})");
        }
    }

    #[test]
    fn only_white_is_open() {
        assert!(Color::White.is_open());
        for c in [Color::Other, Color::Black, Color::Red, Color::Blue] {
            assert!(!c.is_open());
        }
    }

    #[test]
    fn serializes_as_discriminant() {
        assert_eq!(serde_json::to_string(&Color::Red).unwrap(), "3");
        assert_eq!(serde_json::from_str::<Color>("4").unwrap(), Color::Blue);
        assert!(serde_json::from_str::<Color>("5").is_err());
    }
}
