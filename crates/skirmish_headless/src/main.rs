//! Headless skirmish runner.
//!
//! Runs a battle without graphics: loads a RON scenario (or the
//! bundled demo), drives the simulation at a fixed timestep, and
//! prints ASCII frames plus a final summary.
//!
//! # Usage
//!
//! ```bash
//! # Run the bundled demo
//! cargo run -p skirmish_headless
//!
//! # Run a scenario file for 20 simulated seconds
//! cargo run -p skirmish_headless -- --scenario scenarios/demo.ron --frames 1200
//!
//! # Quiet run with a fixed seed, no frame output
//! cargo run -p skirmish_headless -- --seed 7 --render-every 0
//! ```
//!
//! Logs go to stderr; frames and the summary go to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use skirmish_headless::{
    ascii::render_ascii,
    runner::{RunConfig, Runner},
    scenario::{self, Scenario},
};

#[derive(Parser)]
#[command(name = "skirmish_headless")]
#[command(about = "Headless skirmish runner for CI and demos")]
#[command(version)]
struct Cli {
    /// Enable verbose logging to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Scenario file (RON); runs the bundled demo when omitted
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Simulation timestep per frame, in milliseconds
    #[arg(long, default_value_t = 16)]
    dt_ms: u32,

    /// Override the scenario's damage-roll seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print an ASCII frame every N frames (0 disables)
    #[arg(long, default_value_t = 60)]
    render_every: u64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut scenario: Scenario = match cli.scenario {
        Some(path) => match scenario::load_scenario(&path) {
            Ok(scenario) => scenario,
            Err(error) => {
                tracing::error!(%error, "could not load scenario");
                return ExitCode::FAILURE;
            }
        },
        None => scenario::demo(),
    };

    if cli.seed.is_some() {
        scenario.seed = cli.seed;
    }

    let config = RunConfig {
        frames: cli.frames,
        dt_ms: cli.dt_ms,
        render_every: cli.render_every,
    };

    let grid = scenario.grid;
    let mut runner = Runner::new(&scenario);
    let summary = runner.run(&config, |frame, state| {
        println!("--- frame {frame} ---");
        print!("{}", render_ascii(state, grid));
    });

    println!(
        "ran {} frames: red {} / blue {} alive, {} deaths, {} total damage",
        summary.frames, summary.red_alive, summary.blue_alive, summary.deaths, summary.total_damage
    );

    ExitCode::SUCCESS
}
