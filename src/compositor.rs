//! Digit layout: one digit per quadrant, clockwise from the top right.
//!
//! | quadrant     | digit       |
//! |--------------|-------------|
//! | top right    | hour ones   |
//! | bottom right | minute ones |
//! | bottom left  | minute tens |
//! | top left     | hour tens   |

use crate::clock::Tick;
use crate::digits::{DigitAssets, Glyph};
use crate::framebuffer::{FrameBuffer, PixelFormat};
use crate::geometry::Quadrant;
use crate::scheme::ColourScheme;
use crate::{color::Color, ClockError};
use embedded_graphics::{prelude::*, primitives::Rectangle};

/// Screen rectangle holding `quadrant`'s digit.
pub fn quadrant_bounds(quadrant: Quadrant, width: u32, height: u32) -> Rectangle {
    let (half_w, half_h) = (width / 2, height / 2);
    let top_left = match quadrant {
        Quadrant::TopRight => Point::new(half_w as i32, 0),
        Quadrant::BottomRight => Point::new(half_w as i32, half_h as i32),
        Quadrant::BottomLeft => Point::new(0, half_h as i32),
        Quadrant::TopLeft => Point::zero(),
    };
    Rectangle::new(top_left, Size::new(half_w, half_h))
}

/// Which digit of `tick` is shown in `quadrant`.
pub fn digit_for(quadrant: Quadrant, tick: &Tick) -> u8 {
    let [hour_tens, hour_ones, minute_tens, minute_ones] = tick.digits();
    match quadrant {
        Quadrant::TopRight => hour_ones,
        Quadrant::BottomRight => minute_ones,
        Quadrant::BottomLeft => minute_tens,
        Quadrant::TopLeft => hour_tens,
    }
}

/// Paint the secondary background and the four digits in primary.
pub fn composite<F, A>(
    fb: &mut FrameBuffer<F>,
    assets: &A,
    tick: &Tick,
    scheme: &ColourScheme,
) -> Result<(), ClockError>
where
    F: PixelFormat,
    A: DigitAssets + ?Sized,
{
    fb.fill(scheme.secondary);
    let (width, height) = (fb.width(), fb.height());
    for quadrant in Quadrant::ALL {
        let digit = digit_for(quadrant, tick);
        let glyph = assets.glyph(digit).ok_or(ClockError::MissingGlyph(digit))?;
        draw_glyph(fb, glyph, &quadrant_bounds(quadrant, width, height), scheme.primary);
    }
    Ok(())
}

/// Draw `glyph` centred in `bounds`, scaled by the largest whole factor that
/// fits. Glyphs larger than the bounds are clipped.
fn draw_glyph<F: PixelFormat>(fb: &mut FrameBuffer<F>, glyph: &Glyph, bounds: &Rectangle, ink: Color) {
    if glyph.width() == 0 || glyph.height() == 0 {
        return;
    }
    let scale = (bounds.size.width / glyph.width())
        .min(bounds.size.height / glyph.height())
        .max(1);
    let drawn = Size::new(glyph.width() * scale, glyph.height() * scale);
    let origin = bounds.top_left
        + Point::new(
            (bounds.size.width as i32 - drawn.width as i32) / 2,
            (bounds.size.height as i32 - drawn.height as i32) / 2,
        );

    for gy in 0..glyph.height() {
        for gx in 0..glyph.width() {
            if !glyph.is_ink(gx, gy) {
                continue;
            }
            for dy in 0..scale {
                for dx in 0..scale {
                    let point = origin + Point::new((gx * scale + dx) as i32, (gy * scale + dy) as i32);
                    if bounds.contains(point) {
                        fb.set_pixel(point.x as u32, point.y as u32, ink);
                    }
                }
            }
        }
    }
}
