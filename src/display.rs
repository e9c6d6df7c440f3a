//! # Display Capability
//!
//! The face never owns the screen. It asks the host for the framebuffer once
//! per redraw and must hand it back before the redraw returns, whatever
//! happens in between. [`Display::with_frame_buffer`] expresses that as a
//! scoped borrow: the surface is only reachable inside the closure.

use crate::framebuffer::{DisplayShape, FrameBuffer, PixelFormat};
use crate::ClockError;

/// Host-provided access to the display's framebuffer.
pub trait Display {
    type Format: PixelFormat;

    /// Capture the framebuffer, run `draw` on it, then release it.
    ///
    /// Fails with [`ClockError::FrameBufferUnavailable`] if the surface
    /// cannot be captured; `draw` is not run in that case.
    fn with_frame_buffer<R>(
        &mut self,
        draw: impl FnOnce(&mut FrameBuffer<Self::Format>) -> R,
    ) -> Result<R, ClockError>;
}

/// In-memory display used by the terminal renderer and tests.
#[derive(Debug)]
pub struct MemoryDisplay<F: PixelFormat> {
    frame_buffer: FrameBuffer<F>,
    captures: u32,
    releases: u32,
    unavailable: bool,
}

/// Counts the release when dropped, so unwinding also releases.
struct Release<'a> {
    releases: &'a mut u32,
}

impl Drop for Release<'_> {
    fn drop(&mut self) {
        *self.releases += 1;
    }
}

impl<F: PixelFormat> MemoryDisplay<F> {
    pub fn new(width: u32, height: u32, shape: DisplayShape) -> Self {
        Self {
            frame_buffer: FrameBuffer::new(width, height, shape),
            captures: 0,
            releases: 0,
            unavailable: false,
        }
    }

    pub fn frame_buffer(&self) -> &FrameBuffer<F> {
        &self.frame_buffer
    }

    /// Simulate the host refusing (or granting again) framebuffer access.
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    pub fn captures(&self) -> u32 {
        self.captures
    }

    pub fn releases(&self) -> u32 {
        self.releases
    }
}

impl<F: PixelFormat> Display for MemoryDisplay<F> {
    type Format = F;

    fn with_frame_buffer<R>(
        &mut self,
        draw: impl FnOnce(&mut FrameBuffer<F>) -> R,
    ) -> Result<R, ClockError> {
        if self.unavailable {
            return Err(ClockError::FrameBufferUnavailable);
        }
        self.captures += 1;
        let _release = Release {
            releases: &mut self.releases,
        };
        Ok(draw(&mut self.frame_buffer))
    }
}
