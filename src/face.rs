//! # Clock Face
//!
//! Ties the pieces together for one redraw:
//!
//! 1. Resolve the colour scheme for the tick's time of day.
//! 2. Capture the framebuffer.
//! 3. Paint the background and the four digits.
//! 4. Run the radial wipe for the tick's second over the result (skipped
//!    under [`RedrawPolicy::Minute`]).
//! 5. Release the framebuffer (guaranteed by [`Display::with_frame_buffer`]).
//!
//! Settings live here and are only changed through
//! [`ClockFace::apply_message`], which also persists them.

use crate::clock::{Tick, TickUnit};
use crate::compositor;
use crate::digits::DigitAssets;
use crate::display::Display;
use crate::geometry;
use crate::message::ConfigMessage;
use crate::scheme::{self, ColourScheme};
use crate::settings::{Settings, SettingsStore};
use crate::ClockError;
use serde::{Deserialize, Serialize};

/// How often the face is redrawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RedrawPolicy {
    /// Every tick, with the wipe advancing each second
    Second,
    /// Only when the minute changes
    Minute,
}

/// Summary of one completed redraw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameStats {
    pub scheme: ColourScheme,
    pub toggled: usize,
}

pub struct ClockFace<A: DigitAssets> {
    settings: Settings,
    assets: A,
    policy: RedrawPolicy,
    last_drawn: Option<Tick>,
}

impl<A: DigitAssets> ClockFace<A> {
    pub fn new(settings: Settings, assets: A, policy: RedrawPolicy) -> Self {
        Self {
            settings,
            assets,
            policy,
            last_drawn: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn policy(&self) -> RedrawPolicy {
        self.policy
    }

    pub fn scheme_at(&self, tick: &Tick) -> ColourScheme {
        scheme::resolve(tick.time_of_day(), &self.settings)
    }

    /// Handle a tick from the host. Returns `Ok(None)` when the redraw
    /// policy says nothing needs drawing.
    ///
    /// A failed redraw leaves the face as it was, so the next tick is
    /// treated exactly as if the failed one never arrived.
    pub fn handle_tick<D: Display>(
        &mut self,
        tick: Tick,
        display: &mut D,
    ) -> Result<Option<FrameStats>, ClockError> {
        if self.policy == RedrawPolicy::Minute
            && tick.changed_since(self.last_drawn) == TickUnit::Second
        {
            return Ok(None);
        }
        let stats = self.redraw(tick, display).inspect_err(|e| {
            log::warn!(
                "Redraw at {:02}:{:02}:{:02} skipped: {}",
                tick.hour,
                tick.minute,
                tick.second,
                e
            )
        })?;
        self.last_drawn = Some(tick);
        Ok(Some(stats))
    }

    /// Draw one complete frame for `tick`, whether or not the policy would
    /// skip it. Under [`RedrawPolicy::Minute`] only the digits are drawn.
    pub fn redraw<D: Display>(&self, tick: Tick, display: &mut D) -> Result<FrameStats, ClockError> {
        let scheme = self.scheme_at(&tick);
        let second = match self.policy {
            RedrawPolicy::Second => tick.second,
            RedrawPolicy::Minute => 0,
        };
        display.with_frame_buffer(|fb| -> Result<FrameStats, ClockError> {
            compositor::composite(fb, &self.assets, &tick, &scheme)?;
            let toggled = geometry::wipe(fb, second, &scheme);
            Ok(FrameStats { scheme, toggled })
        })?
    }

    /// Apply a configuration message, persist the result and force a full
    /// redraw on the next tick.
    pub fn apply_message<S: SettingsStore + ?Sized>(
        &mut self,
        message: &ConfigMessage,
        store: &mut S,
    ) -> Result<usize, ClockError> {
        let applied = message.apply(&mut self.settings);
        store.save(&self.settings)?;
        self.last_drawn = None;
        log::info!("Applied {} of {} settings fields", applied, message.len());
        Ok(applied)
    }
}
