//! Star rating to difficulty color ramp.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Star rating breakpoints of the gradient.
pub const DIFFICULTY_DOMAIN: [f64; 11] = [0.1, 1.25, 2.0, 2.5, 3.3, 4.2, 4.9, 5.8, 6.7, 7.7, 9.0];

/// Colors at each breakpoint of [`DIFFICULTY_DOMAIN`].
pub const DIFFICULTY_RANGE: [Rgb; 11] = [
    Rgb::new(0x42, 0x90, 0xFB),
    Rgb::new(0x4F, 0xC0, 0xFF),
    Rgb::new(0x4F, 0xFF, 0xD5),
    Rgb::new(0x7C, 0xFF, 0x4F),
    Rgb::new(0xF6, 0xF0, 0x5C),
    Rgb::new(0xFF, 0x80, 0x68),
    Rgb::new(0xFF, 0x4E, 0x6F),
    Rgb::new(0xC6, 0x45, 0xB8),
    Rgb::new(0x65, 0x63, 0xDE),
    Rgb::new(0x18, 0x15, 0x8E),
    Rgb::new(0x00, 0x00, 0x00),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        let invalid = || Error::ConfigParseError(format!("Invalid hex color: {}", hex));
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| {
            let value = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            value.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Color for a star rating.
///
/// Ratings at or below the first breakpoint (and NaN) get the first color,
/// ratings at or above the last get black, and anything in between is
/// linearly interpolated per channel.
pub fn difficulty_color(stars: f64) -> Rgb {
    let last = DIFFICULTY_DOMAIN.len() - 1;

    if stars.is_nan() || stars <= DIFFICULTY_DOMAIN[0] {
        return DIFFICULTY_RANGE[0];
    }
    if stars >= DIFFICULTY_DOMAIN[last] {
        return DIFFICULTY_RANGE[last];
    }

    let upper = DIFFICULTY_DOMAIN.partition_point(|&d| d <= stars);
    let lower = upper - 1;
    let (low, high) = (DIFFICULTY_DOMAIN[lower], DIFFICULTY_DOMAIN[upper]);
    let t = (stars - low) / (high - low);

    DIFFICULTY_RANGE[lower].lerp(DIFFICULTY_RANGE[upper], t)
}
