/*
 * Renderer Module
 *
 * Draws each gopher's sprite at its position and heading. The simulation
 * world has its origin in the top-left corner with y pointing down; nannou
 * draws around the window center with y pointing up, so every point goes
 * through `to_screen` first.
 */

use std::path::Path;

use nannou::prelude::*;

use crate::app::Model;
use crate::config::World;
use crate::ui;
use crate::vector::Vector;

// Stand-in radius when no sprite image could be loaded
const FALLBACK_RADIUS: f32 = 8.0;

/// Load the gopher sprite, or `None` if the image is missing or unreadable.
pub fn load_sprite(app: &App, path: &Path) -> Option<wgpu::Texture> {
    match wgpu::Texture::from_path(app, path) {
        Ok(texture) => {
            log::info!("loaded sprite {}", path.display());
            Some(texture)
        }
        Err(err) => {
            log::warn!(
                "could not load sprite {}: {}; drawing circles instead",
                path.display(),
                err
            );
            None
        }
    }
}

// World coordinates to nannou's centered, y-up frame
pub fn to_screen(point: Vector, world: &World) -> Point2 {
    pt2(
        (point.x - world.width / 2.0) as f32,
        (world.height / 2.0 - point.y) as f32,
    )
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(WHITE);

    let world = model.flock.world();
    let scale = model.params.sprite_scale;

    for gopher in model.flock.agents() {
        let xy = to_screen(gopher.position(), &world);
        // y is flipped, so positive world headings turn the other way on screen
        let angle = -(gopher.orientation() as f32);

        match &model.sprite {
            Some(texture) => {
                let [w, h] = texture.size();
                draw.texture(texture)
                    .xy(xy)
                    .w_h(w as f32 * scale, h as f32 * scale)
                    .rotate(angle);
            }
            None => {
                draw.ellipse()
                    .xy(xy)
                    .radius(FALLBACK_RADIUS)
                    .color(rgb(0.4, 0.75, 0.85))
                    .stroke(BLACK)
                    .stroke_weight(1.0);
            }
        }
    }

    if model.params.show_debug {
        draw_debug_overlay(&draw, model, &world);
        ui::draw_debug_info(&draw, &model.debug_info, app.window_rect(), model.flock.len());
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("failed to draw frame: {:?}", err);
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        log::error!("failed to draw controls: {:?}", err);
    }
}

// Goals, steering lines, and the shared center of gravity
fn draw_debug_overlay(draw: &Draw, model: &Model, world: &World) {
    for gopher in model.flock.agents() {
        let position = to_screen(gopher.position(), world);
        let goal = to_screen(gopher.goal(), world);

        draw.line()
            .start(position)
            .end(goal)
            .color(rgba(0.2, 0.2, 0.2, 0.3))
            .stroke_weight(1.0);

        draw.ellipse()
            .xy(goal)
            .radius(3.0)
            .no_fill()
            .stroke(GREEN)
            .stroke_weight(1.0);
    }

    let cog = to_screen(model.debug_info.center_of_gravity, world);
    draw.ellipse().xy(cog).radius(5.0).color(RED);

    let center = to_screen(world.center(), world);
    draw.ellipse()
        .xy(center)
        .radius(5.0)
        .no_fill()
        .stroke(BLUE)
        .stroke_weight(1.0);
}
