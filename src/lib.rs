//! # Cutpie Clock Core Library
//!
//! This library renders a "cut pie" clock face on a small bitmap display: the
//! hour and minute digits fill the four quadrants of the screen, and a pie
//! slice swept clockwise from 12 o'clock inverts the colours of everything it
//! has passed over, showing how far through the current minute we are.
//!
//! ## Design Philosophy
//!
//! ### One Pass per Second
//! - **No per-pixel trigonometry**: the sweep boundary comes from a canned
//!   cotangent table, one multiply-add per scanline
//! - **In-place**: pixels are toggled directly in the framebuffer bytes, with
//!   no intermediate mask or second surface
//! - **Depth-agnostic**: the same sweep drives full colour (swap between the
//!   two scheme colours) and 1-bit displays (flip the pixel's bit)
//!
//! ### Forced Refresh
//! The two scheme colours trade places on odd minutes, so every pixel on the
//! face changes once a minute even when nothing else does.
//!
//! ### Host Boundary
//! The face only needs three things from its environment, each behind a
//! trait so the terminal simulator and tests can stand in for real hardware:
//! - [`display::Display`]: scoped access to the framebuffer
//! - [`digits::DigitAssets`]: pre-rendered digit glyphs
//! - [`settings::SettingsStore`]: somewhere to keep the settings blob
//!
//! Ticks are plain [`clock::Tick`] values passed to
//! [`face::ClockFace::handle_tick`].
//!
//! ## Data Flow
//! 1. **Tick**: the host delivers the wall-clock time
//! 2. **Scheme**: settings + time of day + minute parity → two colours
//! 3. **Digits**: background and four digits painted into the framebuffer
//! 4. **Wipe**: swept pixels toggled for the current second

use thiserror::Error;

// Module declarations
pub mod clock;
pub mod color;
pub mod compositor;
pub mod config;
pub mod cotangent;
pub mod digits;
pub mod display;
pub mod face;
pub mod framebuffer;
pub mod geometry;
pub mod message;
pub mod renderer;
pub mod scheme;
pub mod settings;

pub use clock::Tick;
pub use face::{ClockFace, FrameStats, RedrawPolicy};
pub use scheme::ColourScheme;
pub use settings::{Settings, SettingsError};

/// Errors surfaced by the clock face.
///
/// None of these are fatal to the process: a failed redraw is skipped and
/// the next tick starts afresh.
#[derive(Error, Debug)]
pub enum ClockError {
    /// The host could not hand over the framebuffer this time
    #[error("frame buffer unavailable")]
    FrameBufferUnavailable,

    /// Digit asset provider has no glyph for this digit
    #[error("no glyph for digit {0}")]
    MissingGlyph(u8),

    /// Stored or received settings failed validation
    #[error("settings: {0}")]
    Settings(#[from] SettingsError),

    /// Settings store file operations failed
    #[error("settings store IO: {0}")]
    Store(#[from] std::io::Error),

    /// Configuration message was not a JSON dictionary
    #[error("message decode: {0}")]
    Message(#[from] serde_json::Error),
}
