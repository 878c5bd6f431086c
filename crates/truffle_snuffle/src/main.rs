//! TruffleSnuffle: steer the pig to the truffle
//!
//! Runs the scene headless on a fixed time step. A scripted pilot stands in
//! for the keyboard: it turns the pig towards the truffle, walks over, and
//! hops once it arrives.

mod config;
mod controls;
mod easing;
mod error;
mod scene;

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use truffle_engine::config::Config;
use truffle_engine::debug::DebugDrawSystem;
use truffle_engine::foundation::logging;
use truffle_engine::foundation::math::Point3;
use truffle_engine::foundation::time::Timer;
use truffle_engine::input::{InputState, KeyCode};

use crate::config::GameConfig;
use crate::scene::TruffleScene;

const DEFAULT_CONFIG_PATH: &str = "truffle_snuffle.toml";

#[derive(Debug, Parser)]
#[command(name = "truffle_snuffle", about = "Steer the pig to the truffle")]
struct Args {
    /// Configuration file (.toml or .ron); defaults are used when it is missing
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Fixed frame delta in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Default log level; RUST_LOG overrides it
    #[arg(long, value_name = "LEVEL", default_value = "info", value_parser = parse_log_level)]
    log_level: LevelFilter,

    /// Write the default configuration to PATH and exit
    #[arg(long, value_name = "PATH")]
    write_default_config: Option<PathBuf>,
}

fn parse_log_level(level: &str) -> Result<LevelFilter, String> {
    level
        .parse()
        .map_err(|_| format!("unknown log level '{level}' (expected off, error, warn, info, debug or trace)"))
}

/// Scripted keyboard for the headless run
///
/// Emits press/release events the way a window backend would and keeps the
/// resulting key state between frames.
struct DemoPilot {
    turn_frames: u64,
    jumped: bool,
    keys: InputState,
}

impl DemoPilot {
    fn new(turn_rate: f32) -> Self {
        // Quarter turn to face +X, where the truffle sits
        let turn_frames = if turn_rate > 0.0 {
            (std::f32::consts::FRAC_PI_2 / turn_rate).round() as u64
        } else {
            0
        };
        Self {
            turn_frames,
            jumped: false,
            keys: InputState::new(),
        }
    }

    fn input(&mut self, frame: u64, colliding: bool) -> &InputState {
        let held = if frame < self.turn_frames {
            Some(KeyCode::Left)
        } else if colliding && !self.jumped {
            self.jumped = true;
            Some(KeyCode::Space)
        } else if colliding {
            None
        } else {
            Some(KeyCode::Up)
        };

        for key in [KeyCode::Left, KeyCode::Up, KeyCode::Space] {
            self.keys.handle_key_input(key, held == Some(key));
        }
        &self.keys
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init_with_level(args.log_level);

    if let Some(path) = &args.write_default_config {
        GameConfig::default().save_to_file(path)?;
        log::info!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    if !(args.dt > 0.0 && args.dt.is_finite()) {
        return Err(format!("--dt must be a positive number of seconds, got {}", args.dt).into());
    }

    let config = GameConfig::load_or_default(&args.config)?;
    let mut scene = TruffleScene::new(&config)?;
    let mut pilot = DemoPilot::new(config.gameplay.turn_rate);
    let mut recorder = DebugDrawSystem::new();
    let mut timer = Timer::fixed(args.dt);

    let mut colliding = false;
    let mut contacts = 0u32;
    let mut colliding_frames = 0u64;

    for frame in 0..args.frames {
        let time = timer.update();
        let input = pilot.input(frame, colliding);

        let report = scene.update(time, input);
        if report.exit_requested {
            log::info!("Exit requested at frame {}", frame);
            break;
        }
        colliding = report.colliding;
        if report.entered {
            contacts += 1;
        }
        if colliding {
            colliding_frames += 1;
        }

        recorder.begin_frame();
        scene.draw_debug(&mut recorder);
        let [pig, truffle] = scene.model_transforms();
        log::trace!(
            "frame {}: {} debug shapes, pig at {:?}, truffle at {:?}",
            frame,
            recorder.shape_count(),
            pig.transform_point(&Point3::origin()),
            truffle.transform_point(&Point3::origin()),
        );
    }

    let pig = scene.player_body();
    log::info!(
        "Simulated {} frames ({:.2}s): {} contact(s), {} colliding frame(s), pig ended at ({:.1}, {:.1}, {:.1})",
        timer.frame_count(),
        timer.total_time(),
        contacts,
        colliding_frames,
        pig.position.x,
        pig.position.y,
        pig.position.z,
    );
    log::debug!("Camera finished at {:?}", scene.camera().position().as_slice());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pilot_turns_then_walks_then_hops() {
        let mut pilot = DemoPilot::new(0.1);
        assert_eq!(pilot.turn_frames, 16);

        assert!(pilot.input(0, false).is_key_down(KeyCode::Left));
        assert!(pilot.input(16, false).is_key_down(KeyCode::Up));
        assert!(pilot.input(40, true).is_key_down(KeyCode::Space));
        let after_hop = pilot.input(41, true);
        assert!(!after_hop.is_key_down(KeyCode::Space));
        assert!(!after_hop.is_key_down(KeyCode::Up));
    }

    #[test]
    fn test_pilot_releases_previous_key() {
        let mut pilot = DemoPilot::new(0.1);
        pilot.input(0, false);

        let walking = pilot.input(16, false);
        assert!(walking.is_key_down(KeyCode::Up));
        assert!(!walking.is_key_down(KeyCode::Left));
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["truffle_snuffle"]);
        assert_eq!(args.frames, 600);
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert!(args.write_default_config.is_none());
        assert_eq!(args.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_log_level_is_validated() {
        let args = Args::try_parse_from(["truffle_snuffle", "--log-level", "TRACE"]).unwrap();
        assert_eq!(args.log_level, LevelFilter::Trace);

        assert!(Args::try_parse_from(["truffle_snuffle", "--log-level", "loud"]).is_err());
    }
}
