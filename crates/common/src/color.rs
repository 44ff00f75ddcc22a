use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Error parsing a color from its hex notation.
#[derive(Debug, thiserror::Error)]
pub enum ColorParseError {
    #[error("color must be 6 hex digits, optionally prefixed with '#': {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in color {0:?}")]
    BadDigit(String),
}

/// Linear RGB color with components in [0, 1].
///
/// Serializes as `#rrggbb` hex notation so config files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xrrggbb` value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// Linear interpolation toward `other`.
    ///
    /// Written as `(1 - t) * self + t * other` so t = 0 yields `self`
    /// exactly and t = 1 yields `other` exactly.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let s = 1.0 - t;
        Self {
            r: self.r * s + other.r * t,
            g: self.g * s + other.g * t,
            b: self.b * s + other.b * t,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 {
            return Err(ColorParseError::BadLength(s.to_string()));
        }
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::BadDigit(s.to_string()))?;
        Ok(Self::from_hex(packed))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(c.r), byte(c.g), byte(c.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_unpacks_channels() {
        let c = Rgb::from_hex(0xff6030);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 96.0 / 255.0);
        assert_eq!(c.b, 48.0 / 255.0);
    }

    #[test]
    fn lerp_exact_at_endpoints() {
        let inner = Rgb::from_hex(0xff6030);
        let outer = Rgb::from_hex(0x1b3984);
        assert_eq!(inner.lerp(outer, 0.0), inner);
        assert_eq!(inner.lerp(outer, 1.0), outer);
    }

    #[test]
    fn lerp_midpoint() {
        let black = Rgb::new(0.0, 0.0, 0.0);
        let white = Rgb::new(1.0, 1.0, 1.0);
        let mid = black.lerp(white, 0.5);
        assert_eq!(mid, Rgb::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn parse_with_and_without_prefix() {
        let a: Rgb = "#1b3984".parse().unwrap();
        let b: Rgb = "1b3984".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, Rgb::from_hex(0x1b3984));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#1234567".parse::<Rgb>().is_err());
        assert!("#zzzzzz".parse::<Rgb>().is_err());
    }

    #[test]
    fn hex_round_trip() {
        let c: Rgb = "#ff6030".parse().unwrap();
        assert_eq!(String::from(c), "#ff6030");
    }
}
