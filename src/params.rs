/*
 * Simulation Parameters Module
 *
 * SimulationParams holds what the viewer can change at runtime: the flock
 * configuration used on the next reset plus the viewer's own toggles. It
 * also tracks changes between frames so the app knows when to rebuild the
 * flock.
 */

use crate::config::FlockConfig;
use crate::SPRITE_SCALE;

pub struct SimulationParams {
    pub flock: FlockConfig,
    pub show_debug: bool,
    pub pause_simulation: bool,
    pub sprite_scale: f32,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    agent_count: usize,
    parallel: bool,
    show_debug: bool,
    pause_simulation: bool,
    sprite_scale: f32,
}

/// What changed since the last snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParamChanges {
    pub agent_count_changed: bool,
    pub parallel_changed: bool,
    pub any_changed: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self::new(FlockConfig::default())
    }
}

impl SimulationParams {
    pub fn new(flock: FlockConfig) -> Self {
        Self {
            flock,
            show_debug: false,
            pause_simulation: false,
            sprite_scale: SPRITE_SCALE,
            previous_values: None,
        }
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            agent_count: self.flock.agent_count,
            parallel: self.flock.parallel,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
            sprite_scale: self.sprite_scale,
        });
    }

    // Nothing counts as changed until a snapshot exists
    pub fn detect_changes(&self) -> ParamChanges {
        let Some(prev) = &self.previous_values else {
            return ParamChanges::default();
        };

        let agent_count_changed = self.flock.agent_count != prev.agent_count;
        let parallel_changed = self.flock.parallel != prev.parallel;
        let any_changed = agent_count_changed
            || parallel_changed
            || self.show_debug != prev.show_debug
            || self.pause_simulation != prev.pause_simulation
            || self.sprite_scale != prev.sprite_scale;

        ParamChanges {
            agent_count_changed,
            parallel_changed,
            any_changed,
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_agent_count_range() -> std::ops::RangeInclusive<usize> {
        1..=1000
    }

    pub fn get_sprite_scale_range() -> std::ops::RangeInclusive<f32> {
        0.05..=1.0
    }
}
