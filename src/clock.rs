//! Tick events delivered to the face.

use crate::settings::TimeOfDay;
use chrono::{Local, NaiveTime, Timelike};

/// Wall-clock time of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// Largest time unit that changed between two ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TickUnit {
    Second,
    Minute,
}

impl Tick {
    /// Build a tick, rejecting out-of-range fields.
    pub fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
        (hour < 24 && minute < 60 && second < 60).then_some(Tick {
            hour,
            minute,
            second,
        })
    }

    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Tick {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            // chrono keeps leap seconds in the nanosecond field, so this is < 60
            second: time.second() as u8,
        }
    }

    pub fn now() -> Self {
        Self::from_time(&Local::now())
    }

    /// Parse `HH:MM:SS`.
    pub fn parse(text: &str) -> Option<Self> {
        NaiveTime::parse_from_str(text, "%H:%M:%S")
            .ok()
            .map(|time| Self::from_time(&time))
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        // Fields are range checked on construction
        TimeOfDay::new(self.hour.min(23), self.minute.min(59)).unwrap_or_default()
    }

    /// What changed since `previous`. Without a previous tick everything is
    /// considered changed.
    pub fn changed_since(&self, previous: Option<Tick>) -> TickUnit {
        match previous {
            Some(prev) if prev.hour == self.hour && prev.minute == self.minute => TickUnit::Second,
            _ => TickUnit::Minute,
        }
    }

    /// Digits as (hour tens, hour ones, minute tens, minute ones).
    pub fn digits(&self) -> [u8; 4] {
        [
            self.hour / 10,
            self.hour % 10,
            self.minute / 10,
            self.minute % 10,
        ]
    }
}
