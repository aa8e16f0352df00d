//! Brick Bounce headless driver
//!
//! Plays one round without a renderer: the paddle tracks the ball, frames are
//! a fixed 16ms apart. Prints a JSON summary on stdout.
//!
//! Usage: `brick-bounce [config.json | mode] [max_frames]`
//!
//! `mode` is `breakout` or `free-bounce` and selects that mode's defaults.

use serde::Serialize;

use brick_bounce::sim::{BodyKind, BodySnapshot, RoundPhase, Simulation, TerminalSignal};
use brick_bounce::{GameMode, SimConfig, SimError};

/// Frame spacing fed to the kernel
const FRAME_MS: f32 = 16.0;
/// Default frame cap (about five minutes at 60 fps)
const DEFAULT_MAX_FRAMES: u64 = 60 * 60 * 5;

/// What the round came to
#[derive(Debug, Serialize)]
struct RoundSummary {
    mode: GameMode,
    outcome: Option<TerminalSignal>,
    phase: RoundPhase,
    frames: u64,
    bricks_destroyed: u32,
    total_bricks: u32,
    circles: Vec<BodySnapshot>,
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let source = args.next();
    let max_frames = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(err)) => {
            log::error!("max_frames must be a whole number: {err}");
            std::process::exit(2);
        }
        None => DEFAULT_MAX_FRAMES,
    };

    match run(source.as_deref(), max_frames) {
        Ok(summary) => match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                log::error!("Could not encode summary: {err}");
                std::process::exit(1);
            }
        },
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    }
}

fn run(source: Option<&str>, max_frames: u64) -> Result<RoundSummary, SimError> {
    let config = load_config(source)?;
    log::info!("Brick Bounce (headless) starting in {} mode", config.mode.as_str());

    let mut sim = Simulation::new(config)?;
    let paddle = sim.paddle_input();
    let mut outcome = None;

    for _ in 0..max_frames {
        if let Some(x) = autopilot_target(&sim) {
            paddle.set_paddle_position(x);
        }
        outcome = sim.advance(FRAME_MS);
        if outcome.is_some() {
            break;
        }
    }

    let round = sim.round();
    Ok(RoundSummary {
        mode: sim.config().mode,
        outcome,
        phase: round.phase,
        frames: sim.ticks(),
        bricks_destroyed: round.destroyed,
        total_bricks: round.total_bricks,
        circles: sim
            .bodies()
            .circles()
            .map(|b| b.snapshot())
            .collect(),
    })
}

/// A mode name picks that mode's defaults; anything else is a config path
fn load_config(source: Option<&str>) -> Result<SimConfig, SimError> {
    match source {
        None => Ok(SimConfig::default()),
        Some(arg) => match GameMode::from_str(arg) {
            Some(mode) => Ok(SimConfig::from_mode(mode)),
            None => SimConfig::load(arg),
        },
    }
}

/// Paddle left edge that centres it under the first ball, kept on the field
fn autopilot_target(sim: &Simulation) -> Option<f32> {
    let config = sim.config();
    let ball = sim.bodies().circles().next()?;
    let width = sim
        .bodies()
        .iter()
        .find(|b| b.kind() == BodyKind::Paddle)?
        .size()?
        .x;
    let x = ball.pos().x - width / 2.0;
    Some(x.clamp(0.0, (config.field_width - width).max(0.0)))
}
