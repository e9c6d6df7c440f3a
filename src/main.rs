//! # Cutpie Clock Application Entry Point
//!
//! Hosts the clock face in a terminal. A [`MemoryDisplay`] stands in for the
//! watch framebuffer and every redraw is printed as ASCII art.
//!
//! ```text
//! cutpie-clock                          # tick once a second, forever
//! cutpie-clock --stdout                 # draw the current time once
//! cutpie-clock --stdout --at 21:59:45   # draw a fixed time once
//! cutpie-clock --message '{"EnableNightMode": 1}'
//! ```

// Test modules
#[cfg(test)]
mod tests;

use anyhow::{anyhow, Context};
use cutpie_clock_lib::{
    config::Config,
    digits::{DigitAssets, FontDigits},
    display::MemoryDisplay,
    framebuffer::{Argb8, ColourDepth, Mono1, PixelFormat},
    message::ConfigMessage,
    renderer::draw_ascii,
    settings::{self, FileStore},
    ClockFace, Tick,
};
use std::env;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

/// Value following `flag` on the command line, if any
fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let development_mode = args.iter().any(|arg| arg == "--stdout");
    let at = arg_value(&args, "--at");
    let message = arg_value(&args, "--message");

    let config = Config::load();
    let mut store = FileStore::new(&config.clock.settings_path);
    let settings = settings::load_or_default(&mut store);
    let mut face = ClockFace::new(settings, FontDigits::new(), config.clock.redraw);

    // Companion message: apply, persist and exit
    if let Some(json) = message {
        let message = ConfigMessage::from_json(&json).context("decode configuration message")?;
        let applied = face.apply_message(&message, &mut store)?;
        log::info!(
            "Settings written to {} ({} fields changed)",
            store.path().display(),
            applied
        );
        return Ok(());
    }

    // Development mode: draw a single frame
    if development_mode || at.is_some() {
        let tick = match at {
            Some(text) => Tick::parse(&text)
                .ok_or_else(|| anyhow!("--at expects HH:MM:SS, got {:?}", text))?,
            None => Tick::now(),
        };
        return match config.display.depth {
            ColourDepth::Colour => draw_once::<Argb8, _>(&face, tick, &config),
            ColourDepth::Mono => draw_once::<Mono1, _>(&face, tick, &config),
        };
    }

    match config.display.depth {
        ColourDepth::Colour => run::<Argb8, _>(&mut face, &config),
        ColourDepth::Mono => run::<Mono1, _>(&mut face, &config),
    }
}

fn draw_once<F: PixelFormat, A: DigitAssets>(
    face: &ClockFace<A>,
    tick: Tick,
    config: &Config,
) -> anyhow::Result<()> {
    let mut display =
        MemoryDisplay::<F>::new(config.display.width, config.display.height, config.display.shape);
    let stats = face.redraw(tick, &mut display)?;
    draw_ascii(display.frame_buffer(), &stats.scheme, &config.ascii);
    Ok(())
}

/// Tick once a second until the process is killed.
fn run<F: PixelFormat, A: DigitAssets>(face: &mut ClockFace<A>, config: &Config) -> anyhow::Result<()> {
    let mut display =
        MemoryDisplay::<F>::new(config.display.width, config.display.height, config.display.shape);

    // Ticks are handled one at a time, no need for worker threads
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    log::info!(
        "Starting clock on {}x{} display, redraw every {:?}",
        config.display.width,
        config.display.height,
        face.policy()
    );

    rt.block_on(async {
        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            match face.handle_tick(Tick::now(), &mut display) {
                Ok(Some(stats)) => {
                    print!("\x1b[2J\x1b[H");
                    draw_ascii(display.frame_buffer(), &stats.scheme, &config.ascii);
                }
                Ok(None) => {}
                // ClockFace::handle_tick has already warned; the next tick retries
                Err(e) => log::trace!("Tick dropped: {}", e),
            }
        }
    })
}
