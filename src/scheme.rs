//! # Colour Scheme Resolution
//!
//! Every redraw starts by deciding which two colours are in play:
//!
//! 1. **Day or night**: outside the configured night window (or with night
//!    mode off) the day pair is used, otherwise the night pair.
//! 2. **Minute parity**: on odd minutes primary and secondary trade places.
//!    Every pixel of the face therefore changes colour once a minute, even
//!    where the geometry is identical, which guarantees a visible refresh.

use crate::color::Color;
use crate::settings::{Settings, TimeOfDay};

/// The two colours used for one redraw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColourScheme {
    pub primary: Color,
    pub secondary: Color,
}

impl ColourScheme {
    /// The same pair with primary and secondary exchanged.
    pub const fn swapped(self) -> Self {
        ColourScheme {
            primary: self.secondary,
            secondary: self.primary,
        }
    }
}

/// Which colour pair applies at a given time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Day,
    Night,
}

/// Classify `time` against the night window.
///
/// Day holds when night mode is off, or when the time lies in
/// `[night_end, night_start)` by hour/minute comparison. The comparison
/// assumes the night window wraps midnight (start later in the day than end).
pub fn mode(time: TimeOfDay, settings: &Settings) -> Mode {
    let (hour, minute) = (time.hour(), time.minute());
    let start = settings.night_start;
    let end = settings.night_end;

    let day = !settings.night_mode
        || (hour == end.hour() && minute >= end.minute())
        || (hour > end.hour() && hour < start.hour())
        || (hour == start.hour() && minute < start.minute());

    if day {
        Mode::Day
    } else {
        Mode::Night
    }
}

/// Resolve the scheme for one redraw at `time`.
///
/// # Example
/// ```
/// use cutpie_clock_lib::color::Color;
/// use cutpie_clock_lib::scheme::resolve;
/// use cutpie_clock_lib::settings::{Settings, TimeOfDay};
///
/// let settings = Settings::default();
/// let even = resolve(TimeOfDay::new(12, 0).unwrap(), &settings);
/// let odd = resolve(TimeOfDay::new(12, 1).unwrap(), &settings);
/// assert_eq!(even.primary, Color::BLUE);
/// assert_eq!(odd, even.swapped());
/// ```
pub fn resolve(time: TimeOfDay, settings: &Settings) -> ColourScheme {
    let base = match mode(time, settings) {
        Mode::Day => ColourScheme {
            primary: settings.primary,
            secondary: settings.secondary,
        },
        Mode::Night => ColourScheme {
            primary: settings.night_primary,
            secondary: settings.night_secondary,
        },
    };

    if time.minute() % 2 == 1 {
        base.swapped()
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u8, minute: u8) -> TimeOfDay {
        TimeOfDay::new(hour, minute).unwrap()
    }

    fn night_enabled() -> Settings {
        Settings {
            night_mode: true,
            ..Settings::default()
        }
    }

    #[test]
    fn test_night_mode_disabled_is_always_day() {
        let settings = Settings::default();
        for hour in 0..24 {
            assert_eq!(mode(at(hour, 30), &settings), Mode::Day);
        }
    }

    #[test]
    fn test_boundaries_of_wrapping_window() {
        let settings = night_enabled();
        assert_eq!(mode(at(21, 59), &settings), Mode::Day);
        assert_eq!(mode(at(22, 0), &settings), Mode::Night);
        assert_eq!(mode(at(5, 59), &settings), Mode::Night);
        assert_eq!(mode(at(6, 0), &settings), Mode::Day);
        assert_eq!(mode(at(0, 0), &settings), Mode::Night);
        assert_eq!(mode(at(23, 59), &settings), Mode::Night);
        assert_eq!(mode(at(12, 0), &settings), Mode::Day);
    }

    #[test]
    fn test_boundaries_with_minutes() {
        let settings = Settings {
            night_start: TimeOfDay::new(21, 30).unwrap(),
            night_end: TimeOfDay::new(6, 45).unwrap(),
            ..night_enabled()
        };
        assert_eq!(mode(at(21, 29), &settings), Mode::Day);
        assert_eq!(mode(at(21, 30), &settings), Mode::Night);
        assert_eq!(mode(at(6, 44), &settings), Mode::Night);
        assert_eq!(mode(at(6, 45), &settings), Mode::Day);
    }

    #[test]
    fn test_night_pair_selected() {
        let settings = night_enabled();
        let scheme = resolve(at(23, 0), &settings);
        assert_eq!(scheme.primary, Color::DARK_GRAY);
        assert_eq!(scheme.secondary, Color::BLACK);

        let scheme = resolve(at(10, 0), &settings);
        assert_eq!(scheme.primary, Color::BLUE);
        assert_eq!(scheme.secondary, Color::WHITE);
    }

    #[test]
    fn test_minute_parity_swaps_every_minute() {
        let settings = night_enabled();
        for hour in [3u8, 12] {
            for minute in 0..59 {
                let now = resolve(at(hour, minute), &settings);
                let next = resolve(at(hour, minute + 1), &settings);
                assert_eq!(next, now.swapped(), "{:02}:{:02}", hour, minute);
            }
        }
    }

    #[test]
    fn test_swapped_is_involution() {
        let scheme = ColourScheme {
            primary: Color::BLUE,
            secondary: Color::WHITE,
        };
        assert_eq!(scheme.swapped().swapped(), scheme);
    }
}
