//! RGBA color tokens and hex parsing

use crate::errors::ConfigError;
use core::str::FromStr;

/// An 8-bit-per-channel RGBA color.
///
/// Segments store the token verbatim; only the rasterizer interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully opaque color from red/green/blue channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with an explicit alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels in `image`'s RGBA byte order.
    pub const fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Source-over composite of `self` (scaled by `coverage` in 0..=1) onto `dst`.
    pub(crate) fn over(self, dst: [u8; 4], coverage: f32) -> [u8; 4] {
        let sa = (self.a as f32 / 255.0) * coverage.clamp(0.0, 1.0);
        if sa <= 0.0 {
            return dst;
        }
        let blend = |s: u8, d: u8| -> u8 {
            let out = s as f32 * sa + d as f32 * (1.0 - sa);
            out.round().clamp(0.0, 255.0) as u8
        };
        let alpha = sa + (dst[3] as f32 / 255.0) * (1.0 - sa);
        [
            blend(self.r, dst[0]),
            blend(self.g, dst[1]),
            blend(self.b, dst[2]),
            (alpha * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    /// Parses `#RRGGBB` or shorthand `#RGB` hex notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ConfigError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(bad)?;
        if !hex.is_ascii() {
            return Err(bad());
        }
        let nibble = |c: char| c.to_digit(16).map(|d| d as u8);
        let bytes: Vec<u8> = match hex.len() {
            3 => hex
                .chars()
                .map(|c| nibble(c).map(|d| d << 4 | d))
                .collect::<Option<_>>()
                .ok_or_else(bad)?,
            6 => (0..3)
                .map(|i| u8::from_str_radix(&hex[2 * i..2 * i + 2], 16).ok())
                .collect::<Option<_>>()
                .ok_or_else(bad)?,
            _ => return Err(bad()),
        };
        Ok(Self::rgb(bytes[0], bytes[1], bytes[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        let long: Color = "#E63946".parse().unwrap();
        assert_eq!(long, Color::rgb(0xE6, 0x39, 0x46));
        let short: Color = "#fff".parse().unwrap();
        assert_eq!(short, Color::rgb(255, 255, 255));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!("E63946".parse::<Color>().is_err());
        assert!("#12345".parse::<Color>().is_err());
        assert!("#gggggg".parse::<Color>().is_err());
    }

    #[test]
    fn over_is_identity_at_full_alpha() {
        let c = Color::rgb(10, 20, 30);
        assert_eq!(c.over([0, 0, 0, 255], 1.0), [10, 20, 30, 255]);
    }
}
