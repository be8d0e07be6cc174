/*
 * Boid Swarm
 *
 * Entry point. Picks the simulation variant and frontend from the command
 * line, loads optional TOML configuration, and hands off to either the
 * windowed nannou app or the headless runner.
 */

use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use boid_swarm::config::{load_config, AppConfig};
use boid_swarm::runner::{self, RunOptions};
use boid_swarm::{app, FirefightSimulation, FlockSimulation};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Variant {
    /// Classic flocking: separation, alignment, cohesion, wall avoidance
    Flock,
    /// Task-driven boids extinguishing fires and refilling at a home base
    Firefight,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Simulation variant to run
    #[arg(value_enum, default_value = "flock")]
    variant: Variant,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run without a window, logging progress instead of drawing
    #[arg(long)]
    headless: bool,

    /// Stop a headless run after this many ticks
    #[arg(long)]
    ticks: Option<u64>,

    /// Target ticks per second for headless runs
    #[arg(long, default_value_t = 60)]
    rate: u32,

    /// Seed for the simulation's random number generator
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("failed to load {}: {}", path.display(), err);
                process::exit(1);
            }
        },
        None => AppConfig::default(),
    };

    if args.headless {
        run_headless(&args, config);
    } else {
        app::set_launch(app::Launch {
            config,
            seed: args.seed,
        });
        match args.variant {
            Variant::Flock => app::run_flock(),
            Variant::Firefight => app::run_firefight(),
        }
    }
}

fn run_headless(args: &Args, config: AppConfig) {
    let running = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&running);
    if let Err(err) = ctrlc::set_handler(move || flag.store(false, Ordering::Relaxed)) {
        log::warn!("failed to install Ctrl+C handler: {}", err);
    }

    let mut rng = StdRng::seed_from_u64(args.seed);
    let options = RunOptions {
        ticks: args.ticks,
        rate: args.rate,
    };

    let completed = match args.variant {
        Variant::Flock => {
            let mut sim = FlockSimulation::new(config.flock, &mut rng);
            runner::run(&mut sim, &options, running)
        }
        Variant::Firefight => {
            let mut sim = FirefightSimulation::new(config.firefight, &mut rng);
            runner::run(&mut sim, &options, running)
        }
    };

    log::info!("finished after {} ticks", completed);
}
