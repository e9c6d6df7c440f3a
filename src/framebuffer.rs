//! # Framebuffer Surfaces and Pixel Formats
//!
//! The wipe and the digit compositor both write straight into a row-major
//! byte buffer. How a pixel lives inside that buffer depends on the display's
//! colour depth, so the byte-level work is delegated to a [`PixelFormat`]
//! strategy:
//!
//! - [`Argb8`]: one byte per pixel, packed `0bAARRGGBB`. Toggling a pixel
//!   swaps it between the two scheme colours.
//! - [`Mono1`]: one bit per pixel, eight pixels per byte, least significant
//!   bit first, `1` = white. Toggling a pixel flips its bit.
//!
//! Rows are handed out as [`RowInfo`] values carrying the row's bytes plus
//! the inclusive range of columns that are actually visible. On a round
//! display that range shrinks towards the top and bottom of the screen.

use crate::color::Color;
use crate::scheme::ColourScheme;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Colour depth of the target display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColourDepth {
    /// 8-bit packed ARGB
    Colour,
    /// 1 bit per pixel
    Mono,
}

/// Physical outline of the display panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayShape {
    Rect,
    Round,
}

/// Byte-level pixel access for one colour depth.
pub trait PixelFormat {
    /// Bytes needed to store one row of `width` pixels.
    fn row_bytes(width: u32) -> usize;

    /// Read the colour stored at column `x`.
    fn read(row: &[u8], x: u32) -> Color;

    /// Store `colour` at column `x`, quantising if the depth requires it.
    fn write(row: &mut [u8], x: u32, colour: Color);

    /// The colour `colour` becomes once stored in this format.
    fn quantize(colour: Color) -> Color;

    /// Invert the pixel at column `x` relative to `scheme`.
    fn toggle(row: &mut [u8], x: u32, scheme: &ColourScheme);

    /// Byte value that fills a whole row with `colour`.
    fn fill_byte(colour: Color) -> u8;
}

/// Full colour, one packed ARGB byte per pixel.
#[derive(Clone, Copy, Debug, Default)]
pub struct Argb8;

impl PixelFormat for Argb8 {
    fn row_bytes(width: u32) -> usize {
        width as usize
    }

    fn read(row: &[u8], x: u32) -> Color {
        Color::from_argb(row[x as usize])
    }

    fn write(row: &mut [u8], x: u32, colour: Color) {
        row[x as usize] = colour.argb();
    }

    fn quantize(colour: Color) -> Color {
        colour
    }

    fn toggle(row: &mut [u8], x: u32, scheme: &ColourScheme) {
        // Anything that is not the primary colour is pulled to primary,
        // including pixels matching neither scheme colour
        let next = if Self::read(row, x) == scheme.primary {
            scheme.secondary
        } else {
            scheme.primary
        };
        Self::write(row, x, next);
    }

    fn fill_byte(colour: Color) -> u8 {
        colour.argb()
    }
}

/// 1 bit per pixel, packed 8 per byte, LSB first, white is 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mono1;

impl Mono1 {
    fn locate(x: u32) -> (usize, u8) {
        ((x / 8) as usize, 1 << (x % 8))
    }
}

impl PixelFormat for Mono1 {
    fn row_bytes(width: u32) -> usize {
        width.div_ceil(8) as usize
    }

    fn read(row: &[u8], x: u32) -> Color {
        let (byte, mask) = Self::locate(x);
        if row[byte] & mask != 0 {
            Color::WHITE
        } else {
            Color::BLACK
        }
    }

    fn write(row: &mut [u8], x: u32, colour: Color) {
        let (byte, mask) = Self::locate(x);
        if colour.is_light() {
            row[byte] |= mask;
        } else {
            row[byte] &= !mask;
        }
    }

    fn quantize(colour: Color) -> Color {
        if colour.is_light() {
            Color::WHITE
        } else {
            Color::BLACK
        }
    }

    fn toggle(row: &mut [u8], x: u32, _scheme: &ColourScheme) {
        let (byte, mask) = Self::locate(x);
        row[byte] ^= mask;
    }

    fn fill_byte(colour: Color) -> u8 {
        if colour.is_light() {
            0xFF
        } else {
            0x00
        }
    }
}

/// One scanline of a framebuffer.
pub struct RowInfo<'a> {
    /// Raw bytes of the whole row
    pub data: &'a mut [u8],
    /// First visible column
    pub min_x: u32,
    /// Last visible column (inclusive)
    pub max_x: u32,
}

/// A row-major pixel surface in format `F`.
///
/// # Example
/// ```
/// use cutpie_clock_lib::color::Color;
/// use cutpie_clock_lib::framebuffer::{DisplayShape, FrameBuffer, Mono1};
///
/// let mut fb = FrameBuffer::<Mono1>::new(16, 4, DisplayShape::Rect);
/// fb.set_pixel(9, 2, Color::WHITE);
/// assert_eq!(fb.pixel(9, 2), Some(Color::WHITE));
/// assert_eq!(fb.pixel(8, 2), Some(Color::BLACK));
/// ```
#[derive(Clone, Debug)]
pub struct FrameBuffer<F: PixelFormat> {
    width: u32,
    height: u32,
    stride: usize,
    shape: DisplayShape,
    data: Vec<u8>,
    format: PhantomData<F>,
}

impl<F: PixelFormat> FrameBuffer<F> {
    /// Allocate a surface cleared to black.
    pub fn new(width: u32, height: u32, shape: DisplayShape) -> Self {
        let stride = F::row_bytes(width);
        Self {
            width,
            height,
            stride,
            shape,
            data: vec![F::fill_byte(Color::BLACK); stride * height as usize],
            format: PhantomData,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn shape(&self) -> DisplayShape {
        self.shape
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Visible column range of row `y`, or `None` if nothing on that row is
    /// visible.
    pub fn row_span(&self, y: u32) -> Option<(u32, u32)> {
        if y >= self.height || self.width == 0 {
            return None;
        }
        match self.shape {
            DisplayShape::Rect => Some((0, self.width - 1)),
            DisplayShape::Round => {
                // Circle inscribed in the panel, sampled at pixel centres
                let radius = f64::from(self.width.min(self.height)) / 2.0;
                let dy = f64::from(y) + 0.5 - f64::from(self.height) / 2.0;
                if dy.abs() >= radius {
                    return None;
                }
                let half_chord = (radius * radius - dy * dy).sqrt();
                let centre = f64::from(self.width) / 2.0;
                let min_x = (centre - half_chord).round().max(0.0) as u32;
                let end_x = ((centre + half_chord).round() as u32).min(self.width);
                if end_x <= min_x {
                    return None;
                }
                Some((min_x, end_x - 1))
            }
        }
    }

    /// Borrow row `y` together with its visible span.
    pub fn row_mut(&mut self, y: u32) -> Option<RowInfo<'_>> {
        let (min_x, max_x) = self.row_span(y)?;
        let start = y as usize * self.stride;
        Some(RowInfo {
            data: &mut self.data[start..start + self.stride],
            min_x,
            max_x,
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = y as usize * self.stride;
        Some(F::read(&self.data[start..start + self.stride], x))
    }

    /// Write one pixel; coordinates outside the surface are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let start = y as usize * self.stride;
        F::write(&mut self.data[start..start + self.stride], x, colour);
    }

    pub fn fill(&mut self, colour: Color) {
        self.data.fill(F::fill_byte(colour));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheme() -> ColourScheme {
        ColourScheme {
            primary: Color::BLUE,
            secondary: Color::WHITE,
        }
    }

    #[test]
    fn test_argb_toggle_swaps_scheme_colours() {
        let mut row = vec![Color::BLUE.argb(), Color::WHITE.argb(), Color::DARK_GRAY.argb()];
        for x in 0..3 {
            Argb8::toggle(&mut row, x, &scheme());
        }
        assert_eq!(Argb8::read(&row, 0), Color::WHITE);
        assert_eq!(Argb8::read(&row, 1), Color::BLUE);
        // Foreign colours are pulled to primary
        assert_eq!(Argb8::read(&row, 2), Color::BLUE);
    }

    #[test]
    fn test_mono_toggle_flips_single_bit() {
        let mut row = vec![0u8; 2];
        Mono1::toggle(&mut row, 0, &scheme());
        Mono1::toggle(&mut row, 9, &scheme());
        assert_eq!(row, vec![0b0000_0001, 0b0000_0010]);
        Mono1::toggle(&mut row, 9, &scheme());
        assert_eq!(row, vec![0b0000_0001, 0]);
    }

    #[test]
    fn test_mono_row_bytes_round_up() {
        assert_eq!(Mono1::row_bytes(8), 1);
        assert_eq!(Mono1::row_bytes(9), 2);
        assert_eq!(Mono1::row_bytes(144), 18);
        assert_eq!(Argb8::row_bytes(144), 144);
    }

    #[test]
    fn test_mono_write_quantises() {
        let mut fb = FrameBuffer::<Mono1>::new(10, 2, DisplayShape::Rect);
        fb.set_pixel(3, 1, Color::WHITE);
        fb.set_pixel(4, 1, Color::BLUE);
        assert_eq!(fb.pixel(3, 1), Some(Color::WHITE));
        assert_eq!(fb.pixel(4, 1), Some(Color::BLACK));
        assert_eq!(Mono1::quantize(Color::from_hex(0xAAAAAA)), Color::WHITE);
    }

    #[test]
    fn test_out_of_bounds_access_is_ignored() {
        let mut fb = FrameBuffer::<Argb8>::new(4, 4, DisplayShape::Rect);
        fb.set_pixel(4, 0, Color::WHITE);
        fb.set_pixel(0, 4, Color::WHITE);
        assert_eq!(fb.pixel(4, 0), None);
        assert!(fb.data().iter().all(|&b| b == Color::BLACK.argb()));
        assert!(fb.row_mut(4).is_none());
    }

    #[test]
    fn test_rect_rows_span_full_width() {
        let mut fb = FrameBuffer::<Argb8>::new(12, 3, DisplayShape::Rect);
        for y in 0..3 {
            let row = fb.row_mut(y).unwrap();
            assert_eq!((row.min_x, row.max_x), (0, 11));
            assert_eq!(row.data.len(), 12);
        }
    }

    #[test]
    fn test_round_rows_follow_circle() {
        let fb = FrameBuffer::<Argb8>::new(180, 180, DisplayShape::Round);
        let (top_min, top_max) = fb.row_span(0).unwrap();
        let (mid_min, mid_max) = fb.row_span(90).unwrap();
        assert_eq!((mid_min, mid_max), (0, 179));
        assert!(top_min > 70 && top_max < 110);
        // Symmetric about the vertical midline
        assert_eq!(top_min, 179 - top_max);
        for y in 0..180 {
            let (min_x, max_x) = fb.row_span(y).unwrap();
            assert!(min_x <= max_x && max_x < 180);
        }
    }

    #[test]
    fn test_fill() {
        let mut fb = FrameBuffer::<Mono1>::new(9, 2, DisplayShape::Rect);
        fb.fill(Color::WHITE);
        assert!((0..9).all(|x| fb.pixel(x, 1) == Some(Color::WHITE)));
        let mut fb = FrameBuffer::<Argb8>::new(3, 1, DisplayShape::Rect);
        fb.fill(Color::BLUE);
        assert_eq!(fb.pixel(2, 0), Some(Color::BLUE));
    }
}
