//! Pixel colours of a black-and-white image

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Colour of a terminal node.
///
/// In quadtree notation `1` is black and `0` is white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Background colour, written `0`
    #[default]
    White,
    /// Foreground colour, written `1`
    Black,
}

impl Color {
    /// Colour for a notation bit (`true` is black).
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Notation bit for this colour.
    pub fn bit(self) -> bool {
        matches!(self, Color::Black)
    }

    /// The other colour.
    pub fn inverted(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Digit used in quadtree notation.
    pub fn digit(self) -> char {
        if self.bit() {
            '1'
        } else {
            '0'
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digit())
    }
}

impl From<bool> for Color {
    fn from(bit: bool) -> Self {
        Color::from_bit(bit)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Serde: leaves are the integers 0 and 1 (booleans are accepted on input)
// ═══════════════════════════════════════════════════════════════════════

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(self.bit()))
    }
}

struct ColorVisitor;

impl Visitor<'_> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0, 1, true or false")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Color, E> {
        Ok(Color::from_bit(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Color, E> {
        match v {
            0 => Ok(Color::White),
            1 => Ok(Color::Black),
            _ => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Color, E> {
        match v {
            0 => Ok(Color::White),
            1 => Ok(Color::Black),
            _ => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ColorVisitor)
    }
}
