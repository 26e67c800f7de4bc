//! Orbital Survival headless runner
//!
//! Runs a session on autopilot for a fixed number of ticks and reports the
//! outcome. Rendering and input live in separate frontends.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use orbital_survival::consts::FPS;
use orbital_survival::sim::{GameState, TickInput, tick};
use orbital_survival::{RenderSnapshot, Settings};

#[derive(Parser, Debug)]
#[command(version, about = "Run an Orbital Survival session on autopilot")]
struct Args {
    /// Number of simulation ticks to run
    #[arg(long, default_value_t = 60 * FPS as u64)]
    ticks: u64,

    /// Seed for the session RNG
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// JSON settings file; missing keys use the defaults
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Print the final render snapshot as JSON
    #[arg(long)]
    snapshot: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("{}", err);
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    log::info!("Orbital Survival (headless) starting: {} ticks, seed {}", args.ticks, args.seed);

    let mut state = GameState::with_settings(settings, args.seed);
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    let mut spawned = 0u64;
    let mut dodges = 0u64;
    for _ in 0..args.ticks {
        let report = tick(&mut state, &input);
        spawned += report.spawned as u64;
        dodges += report.dodges as u64;
    }

    log::info!(
        "Finished after {:.2}s simulated: score={} kills={} dodges={} beams_fired={}",
        state.elapsed_secs(),
        state.score,
        state.kill_count,
        dodges,
        spawned
    );
    println!(
        "TIME: {:6.2}s  SCORE: {}  KILLED: {}  DODGED: {}",
        state.elapsed_secs(),
        state.score,
        state.kill_count,
        dodges
    );

    if args.snapshot {
        match RenderSnapshot::capture(&state).to_json() {
            Ok(json) => println!("{}", json),
            Err(err) => {
                log::error!("Failed to encode snapshot: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
