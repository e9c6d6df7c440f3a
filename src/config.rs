//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! cutpie-config.toml file. It describes the display the face is drawn on,
//! how often it redraws, where user settings are persisted, and how the
//! terminal renderer samples the framebuffer.

use crate::face::RedrawPolicy;
use crate::framebuffer::{ColourDepth, DisplayShape};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "cutpie-config.toml";

/// Application configuration loaded from cutpie-config.toml
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Display geometry and colour depth
    pub display: DisplayConfig,
    /// Redraw cadence and settings persistence
    pub clock: ClockConfig,
    /// Terminal rendering
    pub ascii: AsciiConfig,
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Display width in pixels
    pub width: u32,
    /// Display height in pixels
    pub height: u32,
    /// "colour" (1 byte per pixel) or "mono" (1 bit per pixel)
    pub depth: ColourDepth,
    /// "rect" or "round"
    pub shape: DisplayShape,
}

/// Clock behaviour configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClockConfig {
    /// "second" redraws every tick, "minute" only when the minute changes
    pub redraw: RedrawPolicy,
    /// File holding the persisted settings blob
    pub settings_path: String,
}

/// Terminal rendering configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AsciiConfig {
    /// Print every Nth column
    pub column_step: u32,
    /// Print every Nth row
    pub row_step: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            display: DisplayConfig {
                width: 144,  // Rectangular watch panel
                height: 168, // Rectangular watch panel
                depth: ColourDepth::Colour,
                shape: DisplayShape::Rect,
            },
            clock: ClockConfig {
                redraw: RedrawPolicy::Second,
                settings_path: "cutpie-settings.bin".to_string(),
            },
            ascii: AsciiConfig {
                column_step: 2,
                row_step: 4, // Terminal cells are roughly twice as tall as wide
            },
        }
    }
}

impl Config {
    /// Load configuration from cutpie-config.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    log::info!(
                        "Loaded configuration for {}x{} {:?} display",
                        config.display.width,
                        config.display.height,
                        config.display.depth
                    );
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config file format: {}", e);
                    log::warn!("Using default configuration");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No config file found, using default configuration");
                Self::default()
            }
        }
    }

    /// Save configuration to the given path
    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        log::info!("Configuration saved to {}", path.as_ref().display());
        Ok(())
    }
}
