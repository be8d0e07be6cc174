/*
 * Headless Runner Module
 *
 * Drives a simulation without a window: fixed-rate tick pacing, a shared
 * continue-running flag checked every tick (wired to Ctrl+C by the entry
 * point), and periodic progress logging in place of drawing.
 */

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{info, warn};
use spin_sleep::SpinSleeper;

use crate::firefighter::Activity;
use crate::{FirefightSimulation, FlockSimulation};

// A simulation the headless loop can drive tick by tick
pub trait Simulation {
    fn step(&mut self);

    // One-line progress summary for the periodic log output
    fn summary(&self) -> String;
}

impl Simulation for FlockSimulation {
    fn step(&mut self) {
        self.tick();
    }

    fn summary(&self) -> String {
        let mean_speed = if self.boids().is_empty() {
            0.0
        } else {
            self.boids().iter().map(|b| b.velocity.length()).sum::<f32>()
                / self.boids().len() as f32
        };
        format!("{} boids, mean speed {:.2}", self.boids().len(), mean_speed)
    }
}

impl Simulation for FirefightSimulation {
    fn step(&mut self) {
        self.tick();
    }

    fn summary(&self) -> String {
        let seeking = self
            .firefighters()
            .iter()
            .filter(|f| f.activity == Activity::Seeking)
            .count();
        let burning: f32 = self.fires().iter().map(|f| f.size).sum();
        format!(
            "{} firefighters ({} seeking), {} fires burning, total size {:.1}",
            self.firefighters().len(),
            seeking,
            self.fires().len(),
            burning
        )
    }
}

pub struct RunOptions {
    // Stop after this many ticks; run until interrupted when None
    pub ticks: Option<u64>,
    // Target ticks per second
    pub rate: u32,
}

// Run the loop until the tick budget is spent or the flag goes false.
// Returns the number of ticks completed.
pub fn run(sim: &mut dyn Simulation, options: &RunOptions, running: Arc<AtomicBool>) -> u64 {
    let rate = options.rate.max(1);
    let period = Duration::from_secs_f64(1.0 / rate as f64);
    let sleeper = SpinSleeper::default();
    let mut completed = 0u64;

    info!("running headless at {} ticks/s", rate);

    while running.load(Ordering::Relaxed) {
        if let Some(limit) = options.ticks {
            if completed >= limit {
                break;
            }
        }

        let tick_start = Instant::now();
        sim.step();
        completed += 1;

        // A summary roughly every five seconds of simulated pacing
        if completed % (rate as u64 * 5) == 0 {
            info!("tick {}: {}", completed, sim.summary());
        }

        let elapsed = tick_start.elapsed();
        if elapsed < period {
            sleeper.sleep(period - elapsed);
        } else if rate > 10 {
            warn!("tick {} exceeded budget: {:?} > {:?}", completed, elapsed, period);
        }
    }

    completed
}
