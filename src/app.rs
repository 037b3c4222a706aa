/*
 * Application Module
 *
 * The nannou application model for the gopher viewer. It owns the flock,
 * advances it exactly one tick per frame while unpaused, and rebuilds it
 * when the agent count changes or a reset is requested.
 */

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::anyhow;
use nannou::prelude::*;
use nannou_egui::Egui;

use crate::debug::DebugInfo;
use crate::flock::Flock;
use crate::params::SimulationParams;
use crate::renderer;
use crate::ui;

/// Everything the viewer needs before the window opens.
pub struct Launch {
    pub flock: Flock,
    pub sprite_path: PathBuf,
}

// nannou's model function cannot capture, so the launch state is handed over here
static LAUNCH: Mutex<Option<Launch>> = Mutex::new(None);

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub sprite: Option<wgpu::Texture>,
}

/// Open the viewer window and run until it is closed.
pub fn run(launch: Launch) -> anyhow::Result<()> {
    {
        let mut slot = LAUNCH
            .lock()
            .map_err(|_| anyhow!("viewer launch state is poisoned"))?;
        if slot.is_some() {
            return Err(anyhow!("viewer is already running"));
        }
        *slot = Some(launch);
    }

    nannou::app(model).update(update).run();
    Ok(())
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // nannou calls this only from `run`, which fills LAUNCH first.
    let launch = LAUNCH
        .lock()
        .ok()
        .and_then(|mut slot| slot.take())
        .expect("viewer started without a flock");

    let world = launch.flock.world();
    let window_id = app
        .new_window()
        .title("Gophers")
        .size(world.width as u32, world.height as u32)
        .view(renderer::view)
        .raw_event(raw_window_event)
        .build()
        .expect("Failed to build window");

    let window = app.window(window_id).expect("window vanished after creation");
    let egui = Egui::from_window(&window);

    let sprite = renderer::load_sprite(app, &launch.sprite_path);

    let params = SimulationParams::new(launch.flock.config().clone());
    let mut debug_info = DebugInfo::default();
    debug_info.record_flock(&launch.flock);

    Model {
        flock: launch.flock,
        params,
        egui,
        debug_info,
        sprite,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.egui.set_elapsed_time(update.since_start);

    let actions = ui::update_ui(
        &mut model.egui,
        &mut model.params,
        &model.debug_info,
        model.flock.len(),
    );

    if actions.changes.parallel_changed {
        model.flock.set_parallel(model.params.flock.parallel);
    }

    if actions.reset || actions.changes.agent_count_changed {
        reset_flock(model);
    }

    // The flock advances once per frame
    if !model.params.pause_simulation {
        model.flock.tick();
    }

    model.debug_info.record_flock(&model.flock);
}

// Build a fresh flock from the current parameters
fn reset_flock(model: &mut Model) {
    match Flock::with_config(model.params.flock.clone()) {
        Ok(flock) => {
            log::info!(
                "reset flock: {} gophers (seed {:?})",
                flock.len(),
                flock.seed()
            );
            model.flock = flock;
        }
        Err(err) => {
            log::warn!("keeping current flock, new parameters rejected: {}", err);
            model.params.flock.agent_count = model.flock.len();
        }
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
