/*
 * Debug Information Module
 *
 * Frame and simulation metrics shown in the debug overlay:
 * - FPS (frames per second)
 * - Frame time
 * - Ticks simulated so far
 * - The flock's current center of gravity
 */

use std::time::Duration;

use crate::flock::Flock;
use crate::vector::Vector;

#[derive(Debug, Clone, PartialEq)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks: u64,
    pub center_of_gravity: Vector,
    pub seed: Option<u64>,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            ticks: 0,
            center_of_gravity: Vector::ZERO,
            seed: None,
        }
    }
}

impl DebugInfo {
    /// Refresh the simulation-side fields from the flock.
    pub fn record_flock(&mut self, flock: &Flock) {
        self.ticks = flock.ticks();
        self.center_of_gravity = flock.center_of_gravity();
        self.seed = flock.seed();
    }

    pub fn lines(&self, agent_count: usize) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Gophers: {}", agent_count),
            format!("Ticks: {}", self.ticks),
            format!(
                "Center of gravity: ({:.0}, {:.0})",
                self.center_of_gravity.x, self.center_of_gravity.y
            ),
            match self.seed {
                Some(seed) => format!("Seed: {}", seed),
                None => "Seed: none".to_string(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FlockConfig;

    #[test]
    fn records_flock_state() {
        let mut flock = Flock::with_config(FlockConfig::default().with_seed(3)).unwrap();
        flock.tick();
        flock.tick();

        let mut info = DebugInfo::default();
        info.record_flock(&flock);
        assert_eq!(info.ticks, 2);
        assert_eq!(info.seed, Some(3));
        assert_eq!(info.center_of_gravity, flock.center_of_gravity());

        let lines = info.lines(flock.len());
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[2], "Gophers: 10");
        assert_eq!(lines[3], "Ticks: 2");
        assert_eq!(lines[5], "Seed: 3");
        assert_eq!(DebugInfo::default().lines(1)[5], "Seed: none");
    }
}
