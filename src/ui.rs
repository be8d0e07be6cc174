/*
 * UI Module
 *
 * This module contains the egui control windows for both simulation
 * variants, built with nannou_egui. Sliders adjust the live parameter
 * structs; structural changes (respawns) are reported back to the caller.
 */

use nannou_egui::{egui, Egui};

use crate::config::{FirefightParams, FlockParams};
use crate::debug::DebugInfo;

// Update the flocking UI. Returns true when a full respawn was requested.
pub fn flock_ui(
    egui: &mut Egui,
    params: &mut FlockParams,
    paused: &mut bool,
    show_debug: &mut bool,
    debug_info: &DebugInfo,
) -> bool {
    let mut reset = false;
    let ctx = egui.begin_frame();

    egui::Window::new("Flocking Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Boid Parameters", |ui| {
                ui.add(egui::Slider::new(&mut params.num_boids, 10..=5000).text("Number of Boids"));
                ui.add(egui::Slider::new(&mut params.max_speed, 1.0..=40.0).text("Max Speed"));

                if ui.button("Reset Boids").clicked() {
                    reset = true;
                }
            });

            ui.collapsing("Steering", |ui| {
                ui.add(egui::Slider::new(&mut params.max_force, 0.01..=1.0).text("Max Force"));
                ui.add(
                    egui::Slider::new(&mut params.max_force_wall, 0.01..=1.0)
                        .text("Max Wall Force"),
                );
                ui.add(
                    egui::Slider::new(&mut params.neighbor_radius, 0.0..=200.0)
                        .text("Neighbor Radius"),
                );
                ui.add(egui::Slider::new(&mut params.avoid_radius, 0.0..=200.0).text("Avoid Radius"));
                ui.add(egui::Slider::new(&mut params.wall_margin, 0.0..=200.0).text("Wall Margin"));
            });

            ui.collapsing("Performance", |ui| {
                ui.checkbox(&mut params.parallel, "Parallel Tick");
                ui.separator();
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!(
                    "Frame time: {:.2} ms",
                    debug_info.frame_time.as_secs_f64() * 1000.0
                ));
            });

            ui.checkbox(show_debug, "Show Debug Info");
            ui.checkbox(paused, "Pause Simulation");
        });

    reset
}

// Update the firefighting UI. Returns (reset requested, spawn fire requested).
pub fn firefight_ui(
    egui: &mut Egui,
    params: &mut FirefightParams,
    paused: &mut bool,
    show_debug: &mut bool,
    debug_info: &DebugInfo,
) -> (bool, bool) {
    let mut reset = false;
    let mut spawn_fire = false;
    let ctx = egui.begin_frame();

    egui::Window::new("Firefight Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Boid Parameters", |ui| {
                ui.add(egui::Slider::new(&mut params.boid_speed, 0.5..=10.0).text("Boid Speed"));
                ui.add(
                    egui::Slider::new(&mut params.extinguish_radius, 1.0..=50.0)
                        .text("Extinguish Radius"),
                );
                ui.add(
                    egui::Slider::new(&mut params.fire_shrink_amount, 0.1..=5.0)
                        .text("Fire Shrink Amount"),
                );
                ui.add(
                    egui::Slider::new(&mut params.refill_radius, 1.0..=50.0).text("Refill Radius"),
                );
            });

            ui.collapsing("Scenario", |ui| {
                if ui.button("Spawn Fire").clicked() {
                    spawn_fire = true;
                }
                if ui.button("Reset Simulation").clicked() {
                    reset = true;
                }
                ui.separator();
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!(
                    "Frame time: {:.2} ms",
                    debug_info.frame_time.as_secs_f64() * 1000.0
                ));
            });

            ui.checkbox(show_debug, "Show Debug Info");
            ui.checkbox(paused, "Pause Simulation");
        });

    (reset, spawn_fire)
}
