//! # Digit Glyph Assets
//!
//! The face draws four large digits, one per quadrant. Glyphs are 1-bit
//! bitmaps: a set pixel is "ink" and is painted with the scheme's primary
//! colour, everything else is left showing the secondary background.
//!
//! [`FontDigits`] pre-renders 0-9 once at start-up from the `FONT_10X20`
//! monospace font, using the glyph itself as an embedded-graphics draw
//! target.

use embedded_graphics::{
    mono_font::{ascii::FONT_10X20, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};

/// A 1-bit digit bitmap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    width: u32,
    height: u32,
    ink: Vec<bool>,
}

impl Glyph {
    /// Blank glyph of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ink: vec![false; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.ink[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, ink: bool) {
        if x < self.width && y < self.height {
            self.ink[(y * self.width + x) as usize] = ink;
        }
    }

    pub fn ink_count(&self) -> usize {
        self.ink.iter().filter(|&&ink| ink).count()
    }
}

impl OriginDimensions for Glyph {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Glyph {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) {
                self.set(x, y, color.is_on());
            }
        }
        Ok(())
    }
}

/// Source of pre-rendered digit glyphs.
pub trait DigitAssets {
    /// Glyph for `digit` (0-9), if the asset exists.
    fn glyph(&self, digit: u8) -> Option<&Glyph>;
}

/// Digits rasterised from the built-in 10x20 font.
#[derive(Clone, Debug)]
pub struct FontDigits {
    glyphs: Vec<Glyph>,
}

impl FontDigits {
    pub fn new() -> Self {
        let font = &FONT_10X20;
        let style = MonoTextStyle::new(font, BinaryColor::On);
        let glyphs = (0..10u8)
            .map(|digit| {
                let mut glyph = Glyph::new(font.character_size.width, font.character_size.height);
                let text = char::from(b'0' + digit).to_string();
                Text::with_baseline(&text, Point::zero(), style, Baseline::Top)
                    .draw(&mut glyph)
                    .unwrap_or_else(|never| match never {});
                glyph
            })
            .collect();
        Self { glyphs }
    }
}

impl Default for FontDigits {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitAssets for FontDigits {
    fn glyph(&self, digit: u8) -> Option<&Glyph> {
        self.glyphs.get(usize::from(digit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_digits_are_rendered() {
        let digits = FontDigits::new();
        for digit in 0..10 {
            let glyph = digits.glyph(digit).unwrap();
            assert_eq!((glyph.width(), glyph.height()), (10, 20));
            assert!(glyph.ink_count() > 0, "digit {} has no ink", digit);
        }
        assert!(digits.glyph(10).is_none());
    }

    #[test]
    fn test_digits_are_distinct() {
        let digits = FontDigits::new();
        for a in 0..10 {
            for b in (a + 1)..10 {
                assert_ne!(digits.glyph(a), digits.glyph(b), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_glyph_ignores_out_of_bounds() {
        let mut glyph = Glyph::new(2, 2);
        glyph.set(5, 0, true);
        glyph.set(1, 1, true);
        assert_eq!(glyph.ink_count(), 1);
        assert!(!glyph.is_ink(5, 0));
        assert!(glyph.is_ink(1, 1));
    }
}
