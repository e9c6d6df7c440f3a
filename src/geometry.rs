//! # Radial Wipe Geometry
//!
//! Seconds are shown as a pie slice swept clockwise from 12 o'clock. Rather
//! than test every pixel against an angle, the wipe works one scanline at a
//! time:
//!
//! 1. Where does the sweep ray cross this scanline? The ray passes through
//!    the centre of the surface, so the crossing is
//!    `round((y - H/2) * cot) + W/2`, with `cot` taken from
//!    [`COTANGENT_BY_SECONDS`](crate::cotangent::COTANGENT_BY_SECONDS).
//! 2. Which quadrant is the pixel in? Quadrants that the ray has already
//!    passed are inverted wholesale; the quadrant it is currently crossing
//!    is inverted on one side of the crossing point.
//!
//! That costs one multiply-add per scanline and a couple of comparisons per
//! pixel, which matters because the whole surface is walked every second.
//!
//! ## Midline ties
//!
//! Pixels lying exactly on `x == W/2` belong to the left half and pixels on
//! `y == H/2` to the top half. The crossing formula yields exactly `W/2` on
//! the horizontal midline, and the partial-quadrant comparisons are written
//! against that convention, so every pixel is decided exactly once.

use crate::cotangent::cotangent;
use crate::framebuffer::{FrameBuffer, PixelFormat};
use crate::scheme::ColourScheme;

/// One quarter of the surface, numbered clockwise from the top right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
    TopLeft = 4,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopRight,
        Quadrant::BottomRight,
        Quadrant::BottomLeft,
        Quadrant::TopLeft,
    ];

    /// Classify a pixel. Ties on either midline go to the top/left side.
    pub fn of(x: i32, y: i32, width: i32, height: i32) -> Self {
        let left = x <= width / 2;
        if y <= height / 2 {
            if left {
                Quadrant::TopLeft
            } else {
                Quadrant::TopRight
            }
        } else if left {
            Quadrant::BottomLeft
        } else {
            Quadrant::BottomRight
        }
    }
}

/// Sweep geometry for a surface of fixed size.
#[derive(Clone, Copy, Debug)]
pub struct SweepGeometry {
    width: i32,
    height: i32,
}

impl SweepGeometry {
    /// Dimensions beyond `i32::MAX` are clamped.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: i32::try_from(width).unwrap_or(i32::MAX),
            height: i32::try_from(height).unwrap_or(i32::MAX),
        }
    }

    /// Column where the ray for `second` crosses scanline `y`. Seconds
    /// outside the table are treated as vertical.
    pub fn x_intersection(&self, y: i32, second: u8) -> i32 {
        let cot = cotangent(second).unwrap_or(0.0);
        Self::crossing(y, self.height, self.width, cot)
    }

    fn crossing(y: i32, height: i32, width: i32, cot: f64) -> i32 {
        (f64::from(y - height / 2) * cot).round() as i32 + width / 2
    }

    /// Whether pixel `(x, y)` lies in the swept region at `second`, given the
    /// scanline's crossing column.
    pub fn inverts(&self, x: i32, y: i32, x_intersection: i32, second: u8) -> bool {
        match Quadrant::of(x, y, self.width, self.height) {
            Quadrant::TopRight => second >= 15 || (x > 0 && x < x_intersection),
            Quadrant::BottomRight => {
                second >= 30 || (second > 15 && x < self.width && x >= x_intersection)
            }
            Quadrant::BottomLeft => {
                second >= 45 || (second > 30 && x < self.width && x >= x_intersection)
            }
            Quadrant::TopLeft => second > 45 && x > 0 && x < x_intersection,
        }
    }

    /// Convenience form of [`inverts`](Self::inverts) that computes the
    /// crossing itself. Second 0 covers nothing.
    pub fn covers(&self, x: i32, y: i32, second: u8) -> bool {
        second != 0 && second < 60 && self.inverts(x, y, self.x_intersection(y, second), second)
    }
}

/// Invert every visible pixel swept by the ray at `second`, returning how
/// many pixels were toggled.
///
/// Second 0 is a clean face and touches nothing; seconds outside `0..60` are
/// logged and ignored.
pub fn wipe<F: PixelFormat>(fb: &mut FrameBuffer<F>, second: u8, scheme: &ColourScheme) -> usize {
    if second == 0 {
        return 0;
    }
    let Some(cot) = cotangent(second) else {
        log::warn!("Ignoring wipe for out-of-range second {}", second);
        return 0;
    };

    let geometry = SweepGeometry::new(fb.width(), fb.height());
    let (width, height) = (geometry.width, geometry.height);
    let mut toggled = 0;

    for y in 0..fb.height() {
        let Some(row) = fb.row_mut(y) else {
            continue;
        };
        let x_intersection = SweepGeometry::crossing(y as i32, height, width, cot);
        for x in row.min_x..=row.max_x {
            if geometry.inverts(x as i32, y as i32, x_intersection, second) {
                F::toggle(row.data, x, scheme);
                toggled += 1;
            }
        }
    }

    log::debug!("Wipe at second {} toggled {} pixels", second, toggled);
    toggled
}
