/*
 * Gopher Flock Simulation - Module Definitions
 *
 * The simulation core (vector, controller, gopher, flock, config) has no
 * windowing dependencies. The viewer modules behind the `gui` feature drive
 * it once per frame and draw the result with nannou.
 */

// Re-export key components for easier access
pub use config::{ConfigError, FlockConfig, World};
pub use controller::{PidController, PidGains};
pub use debug::DebugInfo;
pub use flock::Flock;
pub use gopher::Gopher;
pub use params::SimulationParams;
pub use vector::Vector;

// Simulation core
pub mod config;
pub mod controller;
pub mod flock;
pub mod gopher;
pub mod vector;

// Viewer state
pub mod debug;
pub mod params;

#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
pub mod renderer;
#[cfg(feature = "gui")]
pub mod ui;

// Sprites are drawn at this fraction of their image size
pub const SPRITE_SCALE: f32 = 0.2;
pub const DEFAULT_SPRITE_PATH: &str = "gopher.png";
