#![forbid(unsafe_code)]

//! Packed RGBA colour.

use std::fmt;

/// A compact RGBA color.
///
/// - **Layout:** `0xRRGGBBAA` (R in bits 31..24, A in bits 7..0).
/// - Straight alpha; RGB channels are not pre-multiplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    /// Fully transparent (alpha = 0).
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create an opaque RGB color (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create an RGBA color with explicit alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Same colour with a different alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::rgba(self.r(), self.g(), self.b(), a)
    }

    /// Parse `#RRGGBB` or `#RGB`.
    ///
    /// Returns `None` for anything else, including a missing `#`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok();
        match digits.len() {
            6 => {
                let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
                Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?))
            }
            3 => Some(Self::rgb(nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17)),
            _ => None,
        }
    }
}

impl fmt::Display for PackedRgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r(), self.g(), self.b())?;
        if self.a() != 255 {
            write!(f, "{:02X}", self.a())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_round_trip() {
        let c = PackedRgba::rgba(1, 2, 3, 4);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (1, 2, 3, 4));
        assert_eq!(c.with_alpha(255), PackedRgba::rgb(1, 2, 3));
    }

    #[test]
    fn hex_long_and_short_forms() {
        assert_eq!(
            PackedRgba::from_hex("#1D2019"),
            Some(PackedRgba::rgb(0x1D, 0x20, 0x19))
        );
        assert_eq!(
            PackedRgba::from_hex("#fb4934"),
            Some(PackedRgba::rgb(0xFB, 0x49, 0x34))
        );
        assert_eq!(
            PackedRgba::from_hex("#abc"),
            Some(PackedRgba::rgb(0xAA, 0xBB, 0xCC))
        );
    }

    #[test]
    fn hex_rejects_malformed() {
        assert_eq!(PackedRgba::from_hex("1D2019"), None);
        assert_eq!(PackedRgba::from_hex("#1D20"), None);
        assert_eq!(PackedRgba::from_hex("#GGGGGG"), None);
        assert_eq!(PackedRgba::from_hex("#ééé"), None);
        assert_eq!(PackedRgba::from_hex(""), None);
    }

    #[test]
    fn display_as_hex() {
        assert_eq!(PackedRgba::rgb(0xFB, 0xF1, 0xC7).to_string(), "#FBF1C7");
        assert_eq!(PackedRgba::rgba(0, 0, 0, 0x46).to_string(), "#00000046");
    }
}
