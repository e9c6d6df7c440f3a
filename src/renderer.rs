//! # Terminal Rendering
//!
//! Development mode draws the framebuffer as ASCII art so the face can be
//! checked without a display attached. Pixels in the scheme's primary colour
//! print as `#`, secondary as `.`, and anything else (or anything outside the
//! visible area of a round panel) as a space.

use crate::config::AsciiConfig;
use crate::framebuffer::{FrameBuffer, PixelFormat};
use crate::scheme::ColourScheme;

fn cell<F: PixelFormat>(fb: &FrameBuffer<F>, x: u32, y: u32, scheme: &ColourScheme) -> char {
    let visible = fb
        .row_span(y)
        .is_some_and(|(min_x, max_x)| (min_x..=max_x).contains(&x));
    if !visible {
        return ' ';
    }
    let primary = F::quantize(scheme.primary);
    let secondary = F::quantize(scheme.secondary);
    match fb.pixel(x, y) {
        Some(colour) if colour == primary => '#',
        Some(colour) if colour == secondary => '.',
        _ => ' ',
    }
}

/// Render `fb` to a string, sampling every `column_step`-th column and
/// `row_step`-th row.
pub fn render_ascii<F: PixelFormat>(
    fb: &FrameBuffer<F>,
    scheme: &ColourScheme,
    options: &AsciiConfig,
) -> String {
    let column_step = options.column_step.max(1) as usize;
    let row_step = options.row_step.max(1) as usize;

    let mut out = String::new();
    for y in (0..fb.height()).step_by(row_step) {
        let line: String = (0..fb.width())
            .step_by(column_step)
            .map(|x| cell(fb, x, y, scheme))
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Print the framebuffer to stdout.
pub fn draw_ascii<F: PixelFormat>(fb: &FrameBuffer<F>, scheme: &ColourScheme, options: &AsciiConfig) {
    print!("{}", render_ascii(fb, scheme, options));
}
