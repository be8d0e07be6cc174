/*
 * Renderer Module
 *
 * This module draws both simulation variants. Simulation space runs from
 * (0, 0) to (width, height); nannou windows are centered on the origin, so
 * every position is shifted by half the world before drawing.
 */

use nannou::prelude::*;

use crate::app::{FirefightModel, FlockModel};
use crate::firefighter::Activity;
use crate::BOID_SIZE;

fn to_screen(position: glam::Vec2, width: f32, height: f32) -> Point2 {
    pt2(position.x - width / 2.0, position.y - height / 2.0)
}

// Render the flocking model
pub fn flock_view(app: &App, model: &FlockModel, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let params = model.sim.params();

    // Draw each boid as a triangle pointing along its heading
    for boid in model.sim.boids() {
        let angle = boid.velocity.y.atan2(boid.velocity.x);
        let points = [
            pt2(BOID_SIZE, 0.0),
            pt2(-BOID_SIZE, BOID_SIZE / 2.0),
            pt2(-BOID_SIZE, -BOID_SIZE / 2.0),
        ];

        draw.polygon()
            .color(rgb(220u8, 220u8, 220u8))
            .points(points)
            .xy(to_screen(boid.position, params.width, params.height))
            .rotate(angle);
    }

    if model.show_debug {
        // Draw perception radii and velocity for the first boid
        if let Some(first) = model.sim.boids().first() {
            let screen_pos = to_screen(first.position, params.width, params.height);

            draw.ellipse()
                .xy(screen_pos)
                .radius(params.avoid_radius)
                .no_fill()
                .stroke(RED)
                .stroke_weight(1.0);

            draw.ellipse()
                .xy(screen_pos)
                .radius(params.neighbor_radius)
                .no_fill()
                .stroke(GREEN)
                .stroke_weight(1.0);

            draw.arrow()
                .start(screen_pos)
                .end(pt2(
                    screen_pos.x + first.velocity.x * 5.0,
                    screen_pos.y + first.velocity.y * 5.0,
                ))
                .color(YELLOW)
                .stroke_weight(2.0);
        }

        let lines = [
            format!("FPS: {:.1}", model.debug_info.fps),
            format!(
                "Frame time: {:.2} ms",
                model.debug_info.frame_time.as_secs_f64() * 1000.0
            ),
            format!("Boids: {}", model.sim.boids().len()),
            format!("Ticks: {}", model.debug_info.tick_count),
        ];
        draw_debug_text(&draw, app.window_rect(), &lines);
    }

    draw.to_frame(app, &frame).unwrap();
    model.egui.draw_to_frame(&frame).unwrap();
}

// Render the firefighting model
pub fn firefight_view(app: &App, model: &FirefightModel, frame: Frame) {
    let draw = app.draw();
    draw.background().color(rgb(34u8, 139u8, 34u8));

    let params = model.sim.params();

    // Home base, drawn at the refill radius
    draw.ellipse()
        .xy(to_screen(params.home(), params.width, params.height))
        .radius(params.refill_radius)
        .color(WHITE);

    // Fires, sized by what is left to burn
    for fire in model.sim.fires() {
        draw.ellipse()
            .xy(to_screen(fire.position, params.width, params.height))
            .radius(fire.size)
            .color(rgb(255u8, 69u8, 0u8));
    }

    // Firefighters, colored by whether they still carry water
    for fighter in model.sim.firefighters() {
        let color = if fighter.water > 0 {
            rgb(0u8, 191u8, 255u8)
        } else {
            rgb(169u8, 169u8, 169u8)
        };

        draw.ellipse()
            .xy(to_screen(fighter.position, params.width, params.height))
            .radius(5.0)
            .color(color);
    }

    if model.show_debug {
        let seeking = model
            .sim
            .firefighters()
            .iter()
            .filter(|f| f.activity == Activity::Seeking)
            .count();
        let lines = [
            format!("FPS: {:.1}", model.debug_info.fps),
            format!(
                "Frame time: {:.2} ms",
                model.debug_info.frame_time.as_secs_f64() * 1000.0
            ),
            format!(
                "Firefighters: {} ({} seeking)",
                model.sim.firefighters().len(),
                seeking
            ),
            format!("Fires: {}", model.sim.fires().len()),
            format!("Ticks: {}", model.debug_info.tick_count),
        ];
        draw_debug_text(&draw, app.window_rect(), &lines);
    }

    draw.to_frame(app, &frame).unwrap();
    model.egui.draw_to_frame(&frame).unwrap();
}

// Draw debug lines in the top-left corner over a translucent panel
fn draw_debug_text(draw: &Draw, window_rect: Rect, lines: &[String]) {
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * lines.len() as f32 + margin;

    draw.rect()
        .x_y(
            window_rect.left() + panel_width / 2.0,
            window_rect.top() - panel_height / 2.0,
        )
        .w_h(panel_width, panel_height)
        .color(rgba(0.0, 0.0, 0.0, 0.7));

    for (i, line) in lines.iter().enumerate() {
        draw.text(line)
            .x_y(
                window_rect.left() + margin + 70.0,
                window_rect.top() - margin - i as f32 * line_height,
            )
            .color(WHITE)
            .font_size(14);
    }
}
