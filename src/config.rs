/*
 * Configuration Module
 *
 * FlockConfig carries every tunable the simulation core recognizes, with
 * defaults matching the reference flock. World describes the rectangle the
 * gophers live in; its origin is the top-left corner with y growing down.
 */

use thiserror::Error;

use crate::controller::PidGains;
use crate::vector::Vector;

pub const DEFAULT_AGENT_COUNT: usize = 10;
pub const DEFAULT_WORLD_WIDTH: f64 = 640.0;
pub const DEFAULT_WORLD_HEIGHT: f64 = 480.0;
pub const DEFAULT_MAX_SPEED: f64 = 6.0;
pub const DEFAULT_MAX_ACCELERATION: f64 = 1.0;
pub const DEFAULT_GOAL_RESELECT_PROBABILITY: f64 = 0.05;
pub const DEFAULT_GOAL_JITTER: f64 = 0.2;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("a flock needs at least one gopher")]
    EmptyFlock,
    #[error("world dimensions must be positive and finite, got {width}x{height}")]
    InvalidWorld { width: f64, height: f64 },
    #[error("controller gains must be finite, got {0:?}")]
    InvalidGains(PidGains),
    #[error("gopher {index} was built with gains {gopher:?}, flock expects {flock:?}")]
    MismatchedGains {
        index: usize,
        gopher: PidGains,
        flock: PidGains,
    },
    #[error("{name} must be positive and finite, got {value}")]
    InvalidCap { name: &'static str, value: f64 },
    #[error("goal reselect probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),
    #[error("goal jitter must be non-negative and finite, got {0}")]
    InvalidJitter(f64),
}

/// The rectangle gophers move in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct World {
    pub width: f64,
    pub height: f64,
}

impl World {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vector {
        Vector::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamps each coordinate independently into the world rectangle.
    pub fn clamp(&self, point: Vector) -> Vector {
        Vector::new(
            point.x.min(self.width).max(0.0),
            point.y.min(self.height).max(0.0),
        )
    }

    pub fn contains(&self, point: Vector) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(DEFAULT_WORLD_WIDTH, DEFAULT_WORLD_HEIGHT)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlockConfig {
    pub agent_count: usize,
    pub world_width: f64,
    pub world_height: f64,
    pub gains: PidGains,
    pub max_speed: f64,
    pub max_acceleration: f64,
    pub goal_reselect_probability: f64,
    /// Fraction of each world dimension the goal may be offset by.
    pub goal_jitter: f64,
    /// Master seed; `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Update gophers on the rayon pool.
    pub parallel: bool,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            agent_count: DEFAULT_AGENT_COUNT,
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            gains: PidGains::default(),
            max_speed: DEFAULT_MAX_SPEED,
            max_acceleration: DEFAULT_MAX_ACCELERATION,
            goal_reselect_probability: DEFAULT_GOAL_RESELECT_PROBABILITY,
            goal_jitter: DEFAULT_GOAL_JITTER,
            seed: None,
            parallel: false,
        }
    }
}

impl FlockConfig {
    pub fn new(agent_count: usize, world_width: f64, world_height: f64) -> Self {
        Self {
            agent_count,
            world_width,
            world_height,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn world(&self) -> World {
        World::new(self.world_width, self.world_height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.agent_count == 0 {
            return Err(ConfigError::EmptyFlock);
        }
        let dims_ok = |v: f64| v.is_finite() && v > 0.0;
        if !dims_ok(self.world_width) || !dims_ok(self.world_height) {
            return Err(ConfigError::InvalidWorld {
                width: self.world_width,
                height: self.world_height,
            });
        }
        if !self.gains.is_finite() {
            return Err(ConfigError::InvalidGains(self.gains));
        }
        if !dims_ok(self.max_speed) {
            return Err(ConfigError::InvalidCap {
                name: "max_speed",
                value: self.max_speed,
            });
        }
        if !dims_ok(self.max_acceleration) {
            return Err(ConfigError::InvalidCap {
                name: "max_acceleration",
                value: self.max_acceleration,
            });
        }
        if !(0.0..=1.0).contains(&self.goal_reselect_probability) {
            return Err(ConfigError::InvalidProbability(
                self.goal_reselect_probability,
            ));
        }
        if !self.goal_jitter.is_finite() || self.goal_jitter < 0.0 {
            return Err(ConfigError::InvalidJitter(self.goal_jitter));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_flock() {
        let config = FlockConfig::default();
        assert_eq!(config.agent_count, 10);
        assert_eq!(config.gains, PidGains::new(1.0, 0.7, 0.0));
        assert_eq!(config.max_speed, 6.0);
        assert_eq!(config.max_acceleration, 1.0);
        assert_eq!(config.goal_reselect_probability, 0.05);
        assert_eq!(config.goal_jitter, 0.2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let base = FlockConfig::default();

        let c = FlockConfig { agent_count: 0, ..base.clone() };
        assert_eq!(c.validate(), Err(ConfigError::EmptyFlock));

        let c = FlockConfig { world_height: 0.0, ..base.clone() };
        assert!(matches!(c.validate(), Err(ConfigError::InvalidWorld { .. })));

        let c = FlockConfig { world_width: f64::INFINITY, ..base.clone() };
        assert!(matches!(c.validate(), Err(ConfigError::InvalidWorld { .. })));

        let c = FlockConfig { gains: PidGains::new(f64::NAN, 0.0, 0.0), ..base.clone() };
        assert!(matches!(c.validate(), Err(ConfigError::InvalidGains(_))));

        let c = FlockConfig { max_speed: -1.0, ..base.clone() };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::InvalidCap { name: "max_speed", .. })
        ));

        let c = FlockConfig { max_acceleration: 0.0, ..base.clone() };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::InvalidCap { name: "max_acceleration", .. })
        ));

        let c = FlockConfig { goal_reselect_probability: 1.5, ..base.clone() };
        assert_eq!(c.validate(), Err(ConfigError::InvalidProbability(1.5)));

        let c = FlockConfig { goal_jitter: -0.1, ..base };
        assert_eq!(c.validate(), Err(ConfigError::InvalidJitter(-0.1)));
    }

    #[test]
    fn world_clamp_and_center() {
        let world = World::new(640.0, 480.0);
        assert_eq!(world.center(), Vector::new(320.0, 240.0));
        assert_eq!(world.clamp(Vector::new(-5.0, 500.0)), Vector::new(0.0, 480.0));
        assert_eq!(world.clamp(Vector::new(10.0, 20.0)), Vector::new(10.0, 20.0));
        assert!(world.contains(Vector::new(640.0, 0.0)));
        assert!(!world.contains(Vector::new(640.1, 0.0)));
    }
}
