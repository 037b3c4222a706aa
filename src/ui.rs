/*
 * UI Module
 *
 * The egui control window for the viewer and the on-canvas debug panel.
 * Parameter change detection is handled by SimulationParams.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{ParamChanges, SimulationParams};

/// What the user asked for this frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiActions {
    pub reset: bool,
    pub changes: ParamChanges,
}

pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
    agent_count: usize,
) -> UiActions {
    let mut reset = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Flock Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.flock.agent_count,
                        SimulationParams::get_agent_count_range(),
                    )
                    .text("Number of Gophers"),
                );

                if ui.button("Reset Flock").clicked() {
                    reset = true;
                }

                ui.checkbox(&mut params.flock.parallel, "Parallel Updates");
            });

            ui.collapsing("Display", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.sprite_scale,
                        SimulationParams::get_sprite_scale_range(),
                    )
                    .text("Sprite Scale"),
                );
            });

            ui.collapsing("Stats", |ui| {
                for line in debug_info.lines(agent_count) {
                    ui.label(line);
                }
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Overlay");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    UiActions {
        reset,
        changes: params.detect_changes(),
    }
}

// Draw debug information on the canvas
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    agent_count: usize,
) {
    let lines = debug_info.lines(agent_count);

    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 240.0;
    let panel_height = line_height * lines.len() as f32 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_y = window_rect.top() - margin;
    for (i, text) in lines.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);
        draw.text(text)
            .x_y(panel_x, y)
            .w(panel_width - margin)
            .left_justify()
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
