//! # Clock Face Test Suite
//!
//! Drives [`ClockFace`] the way the terminal host does: settings come from a
//! file store, ticks arrive once a second, and companion messages change the
//! colours while the face is running.

use cutpie_clock_lib::{
    color::Color,
    config::AsciiConfig,
    digits::FontDigits,
    display::MemoryDisplay,
    framebuffer::{Argb8, DisplayShape, Mono1},
    message::ConfigMessage,
    renderer::render_ascii,
    settings::{self, FileStore, SettingsStore},
    ClockFace, RedrawPolicy, Settings, Tick,
};
use std::fs;
use tempfile::tempdir;

fn tick(hour: u8, minute: u8, second: u8) -> Tick {
    Tick::new(hour, minute, second).unwrap()
}

/// Test that a companion message survives a restart.
///
/// The message is applied through one face and file store, then a fresh
/// store on the same path must load identical settings.
#[test]
fn message_persists_across_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.bin");

    let mut store = FileStore::new(&path);
    let mut face = ClockFace::new(
        settings::load_or_default(&mut store),
        FontDigits::new(),
        RedrawPolicy::Second,
    );
    assert_eq!(*face.settings(), Settings::default());

    let message = ConfigMessage::from_json(
        r#"{"PrimaryColour": 16733440, "EnableNightMode": 1, "NightStart": "21:30", "NightEnd": "07:00"}"#,
    )
    .unwrap();
    assert_eq!(face.apply_message(&message, &mut store).unwrap(), 4);
    assert_eq!(fs::read(&path).unwrap().len(), settings::SETTINGS_BLOB_LEN);

    let mut reopened = FileStore::new(&path);
    let loaded = reopened.load().unwrap().unwrap();
    assert_eq!(loaded, *face.settings());
    assert_eq!(loaded.primary, Color::from_hex(0xFF5500));
    assert!(loaded.night_mode);
}

/// Test that a truncated settings file falls back to defaults.
#[test]
fn corrupt_settings_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.bin");
    fs::write(&path, [0xFF, 0x00, 0x01]).unwrap();

    let mut store = FileStore::new(&path);
    assert!(store.load().is_err());
    assert_eq!(settings::load_or_default(&mut store), Settings::default());
}

/// Test a minute of night-mode ticks.
///
/// Night colours apply after 22:00, the pair swaps on odd minutes, and every
/// pixel on the face is one of the two scheme colours.
#[test]
fn night_mode_minute_of_ticks() {
    let settings = Settings {
        night_mode: true,
        ..Settings::default()
    };
    let mut face = ClockFace::new(settings, FontDigits::new(), RedrawPolicy::Second);
    let mut display = MemoryDisplay::<Argb8>::new(144, 168, DisplayShape::Rect);

    let mut previous = 0;
    for second in 0..60 {
        let stats = face
            .handle_tick(tick(22, 15, second), &mut display)
            .unwrap()
            .unwrap();
        // 22:15 is an odd minute, so night colours are swapped
        assert_eq!(stats.scheme.primary, Color::BLACK);
        assert_eq!(stats.scheme.secondary, Color::DARK_GRAY);
        assert!(stats.toggled >= previous);
        previous = stats.toggled;
    }
    assert_eq!(display.captures(), 60);
    assert_eq!(display.releases(), 60);

    let fb = display.frame_buffer();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let colour = fb.pixel(x, y).unwrap();
            assert!(colour == Color::BLACK || colour == Color::DARK_GRAY);
        }
    }
}

/// Test that the mono face renders digits in the ASCII preview.
#[test]
fn mono_face_ascii_preview() {
    let face = ClockFace::new(Settings::default(), FontDigits::new(), RedrawPolicy::Minute);
    let mut display = MemoryDisplay::<Mono1>::new(144, 168, DisplayShape::Rect);
    let stats = face.redraw(tick(8, 8, 0), &mut display).unwrap();
    assert_eq!(stats.toggled, 0);

    let text = render_ascii(
        display.frame_buffer(),
        &stats.scheme,
        &AsciiConfig {
            column_step: 1,
            row_step: 1,
        },
    );
    assert_eq!(text.lines().count(), 168);
    // Blue quantises to black and white stays white, so both cells appear
    assert!(text.contains('#'));
    assert!(text.contains('.'));
}

/// Test that the frame buffer is released when the face cannot draw.
#[test]
fn unavailable_display_recovers() {
    let mut face = ClockFace::new(Settings::default(), FontDigits::new(), RedrawPolicy::Second);
    let mut display = MemoryDisplay::<Argb8>::new(144, 168, DisplayShape::Round);

    display.set_unavailable(true);
    assert!(face.handle_tick(tick(6, 0, 5), &mut display).is_err());
    display.set_unavailable(false);
    let stats = face.handle_tick(tick(6, 0, 6), &mut display).unwrap();
    assert!(stats.is_some());
    assert_eq!(display.captures(), display.releases());
}
