/*
 * Flock Module
 *
 * The flock owns a fixed set of gophers and advances them one tick at a
 * time. A tick has two phases separated by a barrier:
 * 1. Reduce every gopher's pre-tick position to the center of gravity
 * 2. Update each gopher with that frozen value
 *
 * Phase 2 touches only the gopher being updated, so it can run on the rayon
 * pool. Every gopher carries its own seeded random source, which keeps
 * parallel and sequential ticks bit-for-bit identical.
 */

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::config::{ConfigError, FlockConfig, World};
use crate::gopher::Gopher;
use crate::vector::Vector;

#[derive(Debug, Clone)]
pub struct Flock {
    gophers: Vec<Gopher>,
    config: FlockConfig,
    seed: Option<u64>,
    ticks: u64,
}

impl Flock {
    /// `agent_count` gophers in a `world_width` x `world_height` world, all
    /// other settings at their defaults.
    pub fn new(
        agent_count: usize,
        world_width: f64,
        world_height: f64,
    ) -> Result<Self, ConfigError> {
        Self::with_config(FlockConfig::new(agent_count, world_width, world_height))
    }

    pub fn with_config(config: FlockConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        let mut master = SmallRng::seed_from_u64(seed);
        let gophers = (0..config.agent_count)
            .map(|_| Gopher::spawn(&config, SmallRng::seed_from_u64(master.gen())))
            .collect();

        log::debug!(
            "spawned {} gophers in {}x{} world (seed {})",
            config.agent_count,
            config.world_width,
            config.world_height,
            seed
        );

        Ok(Self {
            gophers,
            config,
            seed: Some(seed),
            ticks: 0,
        })
    }

    /// A flock made of gophers built by the caller. `agent_count` in the
    /// stored config is set to the number of gophers given.
    ///
    /// Every gopher must have been built with `config.gains`. Goals outside
    /// the world are clamped onto its edge.
    pub fn from_gophers(
        mut config: FlockConfig,
        mut gophers: Vec<Gopher>,
    ) -> Result<Self, ConfigError> {
        if gophers.is_empty() {
            return Err(ConfigError::EmptyFlock);
        }
        config.agent_count = gophers.len();
        config.validate()?;

        let world = config.world();
        for (index, gopher) in gophers.iter_mut().enumerate() {
            let gains = gopher.controller().gains();
            if gains != config.gains {
                return Err(ConfigError::MismatchedGains {
                    index,
                    gopher: gains,
                    flock: config.gains,
                });
            }
            gopher.clamp_goal(&world);
        }

        Ok(Self {
            gophers,
            seed: config.seed,
            config,
            ticks: 0,
        })
    }

    /// Mean position of all gophers.
    pub fn center_of_gravity(&self) -> Vector {
        let total: Vector = self.gophers.iter().map(Gopher::position).sum();
        total / self.gophers.len() as f64
    }

    /// Advance the whole flock by one step.
    pub fn tick(&mut self) {
        let center_of_gravity = self.center_of_gravity();
        log::trace!(
            "tick {}: center of gravity ({:.1}, {:.1})",
            self.ticks,
            center_of_gravity.x,
            center_of_gravity.y
        );

        let config = &self.config;
        if config.parallel {
            // Chunk to keep the number of rayon tasks near the thread count
            let chunk_size = std::cmp::max(self.gophers.len() / rayon::current_num_threads(), 1);
            self.gophers.par_chunks_mut(chunk_size).for_each(|chunk| {
                for gopher in chunk {
                    gopher.update(center_of_gravity, config);
                }
            });
        } else {
            for gopher in &mut self.gophers {
                gopher.update(center_of_gravity, config);
            }
        }

        self.ticks += 1;
    }

    pub fn agents(&self) -> &[Gopher] {
        &self.gophers
    }

    pub fn len(&self) -> usize {
        self.gophers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gophers.is_empty()
    }

    pub fn world(&self) -> World {
        self.config.world()
    }

    pub fn config(&self) -> &FlockConfig {
        &self.config
    }

    /// Master seed the gophers' random sources were derived from. `None`
    /// when the caller built the gophers and gave no seed.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Toggle rayon updates. Results do not depend on this setting.
    pub fn set_parallel(&mut self, parallel: bool) {
        self.config.parallel = parallel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::PidGains;

    fn still_gopher(x: f64, y: f64, seed: u64) -> Gopher {
        Gopher::new(
            Vector::new(x, y),
            Vector::new(x, y),
            PidGains::default(),
            SmallRng::seed_from_u64(seed),
        )
    }

    #[test]
    fn new_builds_requested_count() {
        let flock = Flock::new(10, 640.0, 480.0).unwrap();
        assert_eq!(flock.len(), 10);
        assert_eq!(flock.world(), World::new(640.0, 480.0));
        assert_eq!(flock.ticks(), 0);
        for g in flock.agents() {
            assert!(flock.world().contains(g.position()));
        }
    }

    #[test]
    fn new_rejects_empty_flock() {
        assert_eq!(Flock::new(0, 640.0, 480.0).unwrap_err(), ConfigError::EmptyFlock);
        let err = Flock::from_gophers(FlockConfig::default(), Vec::new()).unwrap_err();
        assert_eq!(err, ConfigError::EmptyFlock);
    }

    #[test]
    fn center_of_gravity_is_mean_position() {
        let gophers = vec![
            still_gopher(0.0, 0.0, 1),
            still_gopher(10.0, 0.0, 2),
            still_gopher(20.0, 30.0, 3),
            still_gopher(10.0, 10.0, 4),
        ];
        let flock = Flock::from_gophers(FlockConfig::default(), gophers).unwrap();
        assert_eq!(flock.center_of_gravity(), Vector::new(10.0, 10.0));
        assert_eq!(flock.config().agent_count, 4);
    }

    #[test]
    fn tick_counts_and_keeps_size() {
        let mut flock = Flock::with_config(FlockConfig::default().with_seed(9)).unwrap();
        for _ in 0..25 {
            flock.tick();
        }
        assert_eq!(flock.ticks(), 25);
        assert_eq!(flock.len(), 10);
    }

    #[test]
    fn seed_is_reported() {
        let flock = Flock::with_config(FlockConfig::default().with_seed(1234)).unwrap();
        assert_eq!(flock.seed(), Some(1234));

        let gophers = vec![still_gopher(1.0, 1.0, 1)];
        let flock = Flock::from_gophers(FlockConfig::default(), gophers).unwrap();
        assert_eq!(flock.seed(), None);
    }

    #[test]
    fn caller_goals_are_clamped_into_world() {
        let config = FlockConfig {
            goal_reselect_probability: 0.0,
            ..FlockConfig::default()
        };
        let stray = Gopher::new(
            Vector::new(10.0, 10.0),
            Vector::new(5000.0, -900.0),
            config.gains,
            SmallRng::seed_from_u64(5),
        );
        let mut flock = Flock::from_gophers(config, vec![stray]).unwrap();
        let world = flock.world();
        assert_eq!(flock.agents()[0].goal(), Vector::new(640.0, 0.0));

        for _ in 0..10 {
            flock.tick();
            assert!(world.contains(flock.agents()[0].goal()));
        }
    }

    #[test]
    fn gophers_with_other_gains_are_rejected() {
        let odd = Gopher::new(
            Vector::new(5.0, 5.0),
            Vector::new(5.0, 5.0),
            PidGains::new(2.0, 0.0, 0.0),
            SmallRng::seed_from_u64(6),
        );
        let gophers = vec![still_gopher(1.0, 1.0, 1), odd];
        let err = Flock::from_gophers(FlockConfig::default(), gophers).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MismatchedGains {
                index: 1,
                gopher: PidGains::new(2.0, 0.0, 0.0),
                flock: PidGains::default(),
            }
        );
    }
}
