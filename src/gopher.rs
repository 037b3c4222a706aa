/*
 * Gopher Module
 *
 * A gopher is one agent of the flock. It steers toward a goal point with
 * its own PID controller and, now and then, picks a fresh goal near a blend
 * of the world center and the flock's center of gravity.
 *
 * Each gopher owns its random source, so a tick can update gophers on
 * different threads without sharing any mutable state.
 */

use rand::rngs::SmallRng;
use rand::Rng;

use crate::config::{FlockConfig, World};
use crate::controller::{PidController, PidGains};
use crate::vector::Vector;

#[derive(Debug, Clone)]
pub struct Gopher {
    position: Vector,
    velocity: Vector,
    acceleration: Vector,
    goal: Vector,
    controller: PidController,
    // Heading for the renderer. The simulation never changes it.
    orientation: f64,
    rng: SmallRng,
}

impl Gopher {
    /// A gopher at rest at `position`, steering toward `goal`.
    pub fn new(position: Vector, goal: Vector, gains: PidGains, rng: SmallRng) -> Self {
        Self {
            position,
            velocity: Vector::ZERO,
            acceleration: Vector::ZERO,
            goal,
            controller: PidController::new(gains),
            orientation: 0.0,
            rng,
        }
    }

    /// Starts the gopher already moving.
    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    // Goals always live inside the world.
    pub(crate) fn clamp_goal(&mut self, world: &World) {
        self.goal = world.clamp(self.goal);
    }

    /// A gopher dropped somewhere in the world, with a first goal picked as
    /// if the whole flock sat at the world center.
    pub fn spawn(config: &FlockConfig, mut rng: SmallRng) -> Self {
        let world = config.world();
        let position = Vector::new(
            rng.gen_range(0.0..world.width),
            rng.gen_range(0.0..world.height),
        );

        let mut gopher = Self::new(position, world.center(), config.gains, rng);
        gopher.select_goal(world.center(), &world, config.goal_jitter);
        gopher
    }

    /// Pick a new goal around a point between the world center and the
    /// flock's center of gravity.
    ///
    /// The farther the flock has drifted from the world center (measured in
    /// half-heights), the more the world center wins. A flock clustered on
    /// the center keeps its goals around its own center of gravity.
    pub fn select_goal(&mut self, center_of_gravity: Vector, world: &World, jitter: f64) {
        let center = world.center();
        let drift = (center - center_of_gravity).length() / (world.height / 2.0);
        let blend = drift.min(1.0);
        let target = center * blend + center_of_gravity * (1.0 - blend);

        let offset = Vector::new(
            self.jitter_sample() * jitter * world.width,
            self.jitter_sample() * jitter * world.height,
        );
        self.goal = world.clamp(target + offset);
    }

    // Uniform in [-1, 1).
    fn jitter_sample(&mut self) -> f64 {
        self.rng.gen::<f64>() * 2.0 - 1.0
    }

    /// Advance one tick.
    ///
    /// Motion is integrated with the acceleration computed on the previous
    /// tick; the controller then reacts to the new position. That one-tick
    /// lag is part of the model.
    pub fn update(&mut self, center_of_gravity: Vector, config: &FlockConfig) {
        self.velocity = (self.velocity + self.acceleration).clamp_magnitude(config.max_speed);
        self.position += self.velocity;

        if self.rng.gen_bool(config.goal_reselect_probability) {
            self.select_goal(center_of_gravity, &config.world(), config.goal_jitter);
            log::trace!("gopher picked new goal ({:.1}, {:.1})", self.goal.x, self.goal.y);
        }

        let error = self.goal - self.position;
        let output = self.controller.update(error);
        self.acceleration = output.clamp_magnitude(config.max_acceleration);
    }

    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    pub fn acceleration(&self) -> Vector {
        self.acceleration
    }

    pub fn goal(&self) -> Vector {
        self.goal
    }

    pub fn orientation(&self) -> f64 {
        self.orientation
    }

    pub fn controller(&self) -> &PidController {
        &self.controller
    }
}
