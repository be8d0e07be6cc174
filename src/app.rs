/*
 * Application Module
 *
 * This module holds the nannou models and update functions for the windowed
 * frontend, one model per simulation variant. The window loop supplies the
 * clock (one simulation tick per frame update), the input (window close),
 * and the renderer (the view functions in the renderer module); the
 * simulations themselves never touch any of it.
 */

use std::sync::OnceLock;

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::AppConfig;
use crate::debug::DebugInfo;
use crate::firefight::FirefightSimulation;
use crate::flock::FlockSimulation;
use crate::{renderer, ui};

// Settings handed from the CLI to nannou's model constructors, which are
// plain function pointers and cannot capture state
pub struct Launch {
    pub config: AppConfig,
    pub seed: u64,
}

static LAUNCH: OnceLock<Launch> = OnceLock::new();

pub fn set_launch(launch: Launch) {
    let _ = LAUNCH.set(launch);
}

fn launch() -> &'static Launch {
    LAUNCH.get().expect("launch settings must be set before the app starts")
}

pub struct FlockModel {
    pub sim: FlockSimulation,
    pub rng: StdRng,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub paused: bool,
    pub show_debug: bool,
}

pub fn run_flock() {
    nannou::app(flock_model).update(flock_update).run();
}

fn flock_model(app: &App) -> FlockModel {
    let launch = launch();
    let params = launch.config.flock.clone();

    let window_id = app
        .new_window()
        .title("Boid Swarm - Flocking")
        .size(params.width as u32, params.height as u32)
        .view(renderer::flock_view)
        .raw_event(flock_raw_window_event)
        .build()
        .unwrap();
    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let mut rng = StdRng::seed_from_u64(launch.seed);
    let sim = FlockSimulation::new(params, &mut rng);

    FlockModel {
        sim,
        rng,
        egui,
        debug_info: DebugInfo::default(),
        paused: false,
        show_debug: false,
    }
}

fn flock_update(app: &App, model: &mut FlockModel, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let reset = ui::flock_ui(
        &mut model.egui,
        model.sim.params_mut(),
        &mut model.paused,
        &mut model.show_debug,
        &model.debug_info,
    );

    if reset {
        model.sim.reset(&mut model.rng);
    } else if model.sim.boids().len() != model.sim.params().num_boids {
        // The population slider moved; adjust without a full respawn
        model.sim.resize(&mut model.rng);
    }

    if !model.paused {
        model.sim.tick();
        model.debug_info.tick_count += 1;
    }
}

fn flock_raw_window_event(
    _app: &App,
    model: &mut FlockModel,
    event: &nannou::winit::event::WindowEvent,
) {
    model.egui.handle_raw_event(event);
}

pub struct FirefightModel {
    pub sim: FirefightSimulation,
    pub rng: StdRng,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub paused: bool,
    pub show_debug: bool,
}

pub fn run_firefight() {
    nannou::app(firefight_model).update(firefight_update).run();
}

fn firefight_model(app: &App) -> FirefightModel {
    let launch = launch();
    let params = launch.config.firefight.clone();

    let window_id = app
        .new_window()
        .title("Boid Swarm - Firefighting")
        .size(params.width as u32, params.height as u32)
        .view(renderer::firefight_view)
        .raw_event(firefight_raw_window_event)
        .build()
        .unwrap();
    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let mut rng = StdRng::seed_from_u64(launch.seed);
    let sim = FirefightSimulation::new(params, &mut rng);

    FirefightModel {
        sim,
        rng,
        egui,
        debug_info: DebugInfo::default(),
        paused: false,
        show_debug: false,
    }
}

fn firefight_update(app: &App, model: &mut FirefightModel, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let (reset, spawn_fire) = ui::firefight_ui(
        &mut model.egui,
        model.sim.params_mut(),
        &mut model.paused,
        &mut model.show_debug,
        &model.debug_info,
    );

    if reset {
        model.sim.reset(&mut model.rng);
    }
    if spawn_fire {
        model.sim.spawn_fire(&mut model.rng);
    }

    if !model.paused {
        model.sim.tick();
        model.debug_info.tick_count += 1;
    }
}

fn firefight_raw_window_event(
    _app: &App,
    model: &mut FirefightModel,
    event: &nannou::winit::event::WindowEvent,
) {
    model.egui.handle_raw_event(event);
}
