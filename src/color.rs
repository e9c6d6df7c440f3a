//! # Packed Display Colours
//!
//! Colours are stored the way small colour watch displays store them: one byte
//! per pixel, two bits per channel, laid out as `0bAARRGGBB`. That gives 64
//! opaque colours, which is plenty for a two-colour face and keeps the full
//! colour framebuffer at exactly one byte per pixel.

use std::fmt;

/// A packed 8-bit ARGB colour (`0bAARRGGBB`).
///
/// # Example
/// ```
/// use cutpie_clock_lib::color::Color;
///
/// let blue = Color::from_hex(0x0000FF);
/// assert_eq!(blue, Color::BLUE);
/// assert_eq!(blue.argb(), 0b1100_0011);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(u8);

impl Color {
    pub const BLACK: Color = Color(0b1100_0000);
    pub const WHITE: Color = Color(0b1111_1111);
    pub const BLUE: Color = Color(0b1100_0011);
    pub const DARK_GRAY: Color = Color(0b1101_0101);

    /// Wrap a raw packed byte.
    pub const fn from_argb(argb: u8) -> Self {
        Color(argb)
    }

    /// Convert a 24-bit `0xRRGGBB` value, keeping the top two bits of each
    /// channel. Alpha is always opaque and bits above 24 are ignored.
    pub const fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as u8 >> 6;
        let g = ((hex >> 8) & 0xFF) as u8 >> 6;
        let b = (hex & 0xFF) as u8 >> 6;
        Color(0b1100_0000 | (r << 4) | (g << 2) | b)
    }

    pub const fn argb(self) -> u8 {
        self.0
    }

    /// Red, green and blue channel levels, each in `0..=3`.
    pub const fn channels(self) -> (u8, u8, u8) {
        ((self.0 >> 4) & 0b11, (self.0 >> 2) & 0b11, self.0 & 0b11)
    }

    /// Whether the colour reads as "light" on a 1-bit display.
    ///
    /// Channel levels are summed (max 9); more than half counts as white.
    pub const fn is_light(self) -> bool {
        let (r, g, b) = self.channels();
        r + g + b >= 5
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.channels();
        // Expand each 2-bit level back to 8 bits (0x00, 0x55, 0xAA, 0xFF)
        write!(f, "#{:02X}{:02X}{:02X}", r * 0x55, g * 0x55, b * 0x55)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_named_colours() {
        assert_eq!(Color::from_hex(0x000000), Color::BLACK);
        assert_eq!(Color::from_hex(0xFFFFFF), Color::WHITE);
        assert_eq!(Color::from_hex(0x0000FF), Color::BLUE);
        assert_eq!(Color::from_hex(0x555555), Color::DARK_GRAY);
    }

    #[test]
    fn test_from_hex_truncates_low_bits() {
        // 0x3F has top bits 00, 0x40 has top bits 01
        assert_eq!(Color::from_hex(0x3F3F3F), Color::BLACK);
        assert_eq!(Color::from_hex(0x404040), Color::DARK_GRAY);
        // Upper byte is not alpha
        assert_eq!(Color::from_hex(0xFF00_0000), Color::BLACK);
    }

    #[test]
    fn test_lightness() {
        assert!(Color::WHITE.is_light());
        assert!(!Color::BLACK.is_light());
        assert!(!Color::BLUE.is_light());
        assert!(!Color::DARK_GRAY.is_light());
        assert!(Color::from_hex(0xAAAAAA).is_light());
    }

    #[test]
    fn test_display_format() {
        assert_eq!(Color::WHITE.to_string(), "#FFFFFF");
        assert_eq!(Color::BLUE.to_string(), "#0000FF");
        assert_eq!(Color::DARK_GRAY.to_string(), "#555555");
    }
}
