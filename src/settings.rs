//! # User Settings and Persistence
//!
//! Settings hold the colours of the face and the night window. They start out
//! as hard-coded defaults, are overwritten by configuration messages, and are
//! persisted verbatim as a small fixed-layout blob:
//!
//! | byte | field                  |
//! |------|------------------------|
//! | 0    | primary colour (ARGB)  |
//! | 1    | secondary colour       |
//! | 2    | night mode enabled 0/1 |
//! | 3    | night primary colour   |
//! | 4    | night secondary colour |
//! | 5, 6 | night start hour, min  |
//! | 7, 8 | night end hour, min    |

use crate::color::Color;
use crate::ClockError;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Size of the persisted settings blob in bytes.
pub const SETTINGS_BLOB_LEN: usize = 9;

/// Problems decoding or validating settings values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("settings blob is {0} bytes, expected {SETTINGS_BLOB_LEN}")]
    BlobLength(usize),

    #[error("hour {0} out of range 0-23")]
    Hour(u8),

    #[error("minute {0} out of range 0-59")]
    Minute(u8),

    #[error("night mode flag must be 0 or 1, got {0}")]
    Flag(u8),

    #[error("malformed time {0:?}, expected HH:MM")]
    TimeString(String),
}

/// An hour and minute within a day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Result<Self, SettingsError> {
        if hour > 23 {
            return Err(SettingsError::Hour(hour));
        }
        if minute > 59 {
            return Err(SettingsError::Minute(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Parse an `"HH:MM"` string. Hours come from characters 0-1 and minutes
    /// from characters 3-4; the separator itself is not inspected.
    ///
    /// ```
    /// use cutpie_clock_lib::settings::TimeOfDay;
    ///
    /// let t = TimeOfDay::parse_hh_mm("22:30").unwrap();
    /// assert_eq!((t.hour(), t.minute()), (22, 30));
    /// assert!(TimeOfDay::parse_hh_mm("7:30").is_err());
    /// ```
    pub fn parse_hh_mm(text: &str) -> Result<Self, SettingsError> {
        let malformed = || SettingsError::TimeString(text.to_string());
        let field = |range: std::ops::Range<usize>| -> Result<u8, SettingsError> {
            let digits = text.get(range).ok_or_else(malformed)?;
            if !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            digits.parse().map_err(|_| malformed())
        };
        Self::new(field(0..2)?, field(3..5)?)
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Colours and night window for the face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub primary: Color,
    pub secondary: Color,
    pub night_mode: bool,
    pub night_primary: Color,
    pub night_secondary: Color,
    pub night_start: TimeOfDay,
    pub night_end: TimeOfDay,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            primary: Color::BLUE,
            secondary: Color::WHITE,
            night_mode: false,
            night_primary: Color::DARK_GRAY,
            night_secondary: Color::BLACK,
            night_start: TimeOfDay { hour: 22, minute: 0 },
            night_end: TimeOfDay { hour: 6, minute: 0 },
        }
    }
}

impl Settings {
    /// Encode into the fixed persisted layout.
    pub fn to_bytes(&self) -> [u8; SETTINGS_BLOB_LEN] {
        [
            self.primary.argb(),
            self.secondary.argb(),
            u8::from(self.night_mode),
            self.night_primary.argb(),
            self.night_secondary.argb(),
            self.night_start.hour,
            self.night_start.minute,
            self.night_end.hour,
            self.night_end.minute,
        ]
    }

    /// Decode and validate a persisted blob.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SettingsError> {
        let bytes: &[u8; SETTINGS_BLOB_LEN] = bytes
            .try_into()
            .map_err(|_| SettingsError::BlobLength(bytes.len()))?;
        let night_mode = match bytes[2] {
            0 => false,
            1 => true,
            other => return Err(SettingsError::Flag(other)),
        };
        Ok(Settings {
            primary: Color::from_argb(bytes[0]),
            secondary: Color::from_argb(bytes[1]),
            night_mode,
            night_primary: Color::from_argb(bytes[3]),
            night_secondary: Color::from_argb(bytes[4]),
            night_start: TimeOfDay::new(bytes[5], bytes[6])?,
            night_end: TimeOfDay::new(bytes[7], bytes[8])?,
        })
    }
}

/// Persistence backend for [`Settings`].
pub trait SettingsStore {
    /// Read stored settings, `Ok(None)` if nothing was ever saved.
    fn load(&mut self) -> Result<Option<Settings>, ClockError>;
    fn save(&mut self, settings: &Settings) -> Result<(), ClockError>;
}

/// Stores the settings blob in a single file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileStore {
    fn load(&mut self) -> Result<Option<Settings>, ClockError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(Settings::from_bytes(&bytes)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, settings: &Settings) -> Result<(), ClockError> {
        fs::write(&self.path, settings.to_bytes())?;
        log::debug!("Settings saved to {}", self.path.display());
        Ok(())
    }
}

/// Keeps the settings blob in memory; nothing survives the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    blob: Option<Vec<u8>>,
}

impl MemoryStore {
    pub fn blob(&self) -> Option<&[u8]> {
        self.blob.as_deref()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&mut self) -> Result<Option<Settings>, ClockError> {
        self.blob
            .as_deref()
            .map(Settings::from_bytes)
            .transpose()
            .map_err(ClockError::from)
    }

    fn save(&mut self, settings: &Settings) -> Result<(), ClockError> {
        self.blob = Some(settings.to_bytes().to_vec());
        Ok(())
    }
}

/// Start from the defaults and overlay whatever the store holds.
/// A missing or unreadable blob leaves the defaults in place.
pub fn load_or_default<S: SettingsStore + ?Sized>(store: &mut S) -> Settings {
    match store.load() {
        Ok(Some(settings)) => {
            log::info!("Loaded stored settings");
            settings
        }
        Ok(None) => {
            log::info!("No stored settings, using defaults");
            Settings::default()
        }
        Err(e) => {
            log::warn!("Stored settings unusable ({}), using defaults", e);
            Settings::default()
        }
    }
}
