//! # Inbound Configuration Messages
//!
//! The companion configuration page sends a small key/value dictionary
//! whenever the user saves. Only the keys present are applied:
//!
//! - `PrimaryColour`, `SecondaryColour`, `PrimaryNightColour`,
//!   `SecondaryNightColour`: 32-bit `0xRRGGBB` integers
//! - `EnableNightMode`: `1` (or `true`) enables night mode
//! - `NightStart`, `NightEnd`: `"HH:MM"` strings
//!
//! A value that cannot be used (a malformed time, a string where a colour was
//! expected, `null`) is logged and the field keeps its previous value. The
//! other keys in the message still apply.

use crate::color::Color;
use crate::settings::{Settings, TimeOfDay};
use crate::ClockError;
use serde::Deserialize;
use std::collections::HashMap;

/// Known message keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKey {
    PrimaryColour,
    SecondaryColour,
    EnableNightMode,
    PrimaryNightColour,
    SecondaryNightColour,
    NightStart,
    NightEnd,
}

impl MessageKey {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "PrimaryColour" => MessageKey::PrimaryColour,
            "SecondaryColour" => MessageKey::SecondaryColour,
            "EnableNightMode" => MessageKey::EnableNightMode,
            "PrimaryNightColour" => MessageKey::PrimaryNightColour,
            "SecondaryNightColour" => MessageKey::SecondaryNightColour,
            "NightStart" => MessageKey::NightStart,
            "NightEnd" => MessageKey::NightEnd,
            _ => return None,
        })
    }
}

/// A single dictionary value.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MessageValue {
    /// Wide enough for unsigned 32-bit colours
    Int(i64),
    Bool(bool),
    Text(String),
    /// Anything else JSON can carry; never applied
    Other(serde_json::Value),
}

/// One configuration message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigMessage {
    entries: HashMap<MessageKey, MessageValue>,
}

impl ConfigMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: MessageKey, value: MessageValue) -> Self {
        self.entries.insert(key, value);
        self
    }

    pub fn get(&self, key: MessageKey) -> Option<&MessageValue> {
        self.entries.get(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decode a JSON object such as
    /// `{"PrimaryColour": 16711680, "NightStart": "22:30"}`.
    /// Unknown keys are skipped.
    pub fn from_json(json: &str) -> Result<Self, ClockError> {
        let raw: HashMap<String, MessageValue> = serde_json::from_str(json)?;
        let mut entries = HashMap::with_capacity(raw.len());
        for (name, value) in raw {
            match MessageKey::from_name(&name) {
                Some(key) => {
                    entries.insert(key, value);
                }
                None => log::debug!("Skipping unknown message key {:?}", name),
            }
        }
        Ok(Self { entries })
    }

    /// Overwrite the fields of `settings` present in this message, returning
    /// how many fields were applied.
    pub fn apply(&self, settings: &mut Settings) -> usize {
        let mut applied = 0;
        for (&key, value) in &self.entries {
            let ok = match key {
                MessageKey::PrimaryColour => set_colour(&mut settings.primary, key, value),
                MessageKey::SecondaryColour => set_colour(&mut settings.secondary, key, value),
                MessageKey::PrimaryNightColour => {
                    set_colour(&mut settings.night_primary, key, value)
                }
                MessageKey::SecondaryNightColour => {
                    set_colour(&mut settings.night_secondary, key, value)
                }
                MessageKey::EnableNightMode => match value {
                    MessageValue::Int(flag) => {
                        settings.night_mode = *flag == 1;
                        true
                    }
                    MessageValue::Bool(flag) => {
                        settings.night_mode = *flag;
                        true
                    }
                    MessageValue::Text(_) | MessageValue::Other(_) => reject(key, value),
                },
                MessageKey::NightStart => set_time(&mut settings.night_start, key, value),
                MessageKey::NightEnd => set_time(&mut settings.night_end, key, value),
            };
            if ok {
                applied += 1;
            }
        }
        applied
    }
}

fn reject(key: MessageKey, value: &MessageValue) -> bool {
    log::warn!("Ignoring {:?} value {:?}", key, value);
    false
}

fn set_colour(field: &mut Color, key: MessageKey, value: &MessageValue) -> bool {
    match value {
        MessageValue::Int(hex) => {
            // Only the low 24 bits carry colour
            *field = Color::from_hex((*hex & 0xFFFF_FFFF) as u32);
            log::info!("{:?}: {}", key, field);
            true
        }
        _ => reject(key, value),
    }
}

fn set_time(field: &mut TimeOfDay, key: MessageKey, value: &MessageValue) -> bool {
    let MessageValue::Text(text) = value else {
        return reject(key, value);
    };
    match TimeOfDay::parse_hh_mm(text) {
        Ok(time) => {
            *field = time;
            log::info!("{:?}: {}", key, time);
            true
        }
        Err(e) => {
            log::warn!("Ignoring {:?}: {}", key, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let message = ConfigMessage::from_json(
            r#"{"PrimaryColour": 16711680, "EnableNightMode": 1, "NightStart": "23:15", "Bogus": 3}"#,
        )
        .unwrap();
        assert_eq!(message.len(), 3);
        assert_eq!(
            message.get(MessageKey::PrimaryColour),
            Some(&MessageValue::Int(0xFF0000))
        );
        assert_eq!(
            message.get(MessageKey::NightStart),
            Some(&MessageValue::Text("23:15".to_string()))
        );
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(ConfigMessage::from_json("[1, 2]").is_err());
        assert!(ConfigMessage::from_json("{").is_err());
    }

    #[test]
    fn test_unusable_value_does_not_spoil_message() {
        for colour in ["null", "1.5", "[1]", "{}"] {
            let json = format!(r#"{{"PrimaryColour": {}, "NightStart": "23:00"}}"#, colour);
            let message = ConfigMessage::from_json(&json).unwrap();
            let mut settings = Settings::default();
            assert_eq!(message.apply(&mut settings), 1, "colour {}", colour);
            assert_eq!(settings.primary, Color::BLUE);
            assert_eq!(settings.night_start, TimeOfDay::new(23, 0).unwrap());
        }
    }

    #[test]
    fn test_unsigned_32_bit_colour() {
        let message = ConfigMessage::from_json(r#"{"SecondaryColour": 4294967295}"#).unwrap();
        assert_eq!(
            message.get(MessageKey::SecondaryColour),
            Some(&MessageValue::Int(0xFFFF_FFFF))
        );
        let mut settings = Settings::default();
        assert_eq!(message.apply(&mut settings), 1);
        assert_eq!(settings.secondary, Color::WHITE);
    }

    #[test]
    fn test_apply_overwrites_present_fields_only() {
        let mut settings = Settings::default();
        let message = ConfigMessage::new()
            .with(MessageKey::SecondaryColour, MessageValue::Int(0x000000))
            .with(MessageKey::EnableNightMode, MessageValue::Int(1))
            .with(MessageKey::NightEnd, MessageValue::Text("07:30".into()));

        assert_eq!(message.apply(&mut settings), 3);
        assert_eq!(settings.secondary, Color::BLACK);
        assert!(settings.night_mode);
        assert_eq!(settings.night_end, TimeOfDay::new(7, 30).unwrap());
        // Untouched
        assert_eq!(settings.primary, Color::BLUE);
        assert_eq!(settings.night_start, TimeOfDay::new(22, 0).unwrap());
    }

    #[test]
    fn test_night_mode_flag_values() {
        let mut settings = Settings {
            night_mode: true,
            ..Settings::default()
        };
        ConfigMessage::new()
            .with(MessageKey::EnableNightMode, MessageValue::Int(2))
            .apply(&mut settings);
        assert!(!settings.night_mode);

        ConfigMessage::new()
            .with(MessageKey::EnableNightMode, MessageValue::Bool(true))
            .apply(&mut settings);
        assert!(settings.night_mode);
    }

    #[test]
    fn test_malformed_values_keep_previous() {
        let mut settings = Settings::default();
        let message = ConfigMessage::new()
            .with(MessageKey::NightStart, MessageValue::Int(2200))
            .with(MessageKey::NightEnd, MessageValue::Text("30:00".into()))
            .with(MessageKey::PrimaryColour, MessageValue::Text("red".into()))
            .with(MessageKey::SecondaryNightColour, MessageValue::Bool(true));

        assert_eq!(message.apply(&mut settings), 0);
        assert_eq!(settings, Settings::default());
    }
}
