/*
 * Controller Module
 *
 * A proportional-derivative-integral feedback controller over 2D error
 * vectors. Each gopher owns one and feeds it the offset to its goal once
 * per tick; the output becomes the gopher's (clamped) acceleration.
 */

use crate::vector::Vector;

/// Weights for the three controller terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PidGains {
    pub p: f64,
    pub d: f64,
    pub i: f64,
}

impl PidGains {
    pub const fn new(p: f64, d: f64, i: f64) -> Self {
        Self { p, d, i }
    }

    pub fn is_finite(&self) -> bool {
        self.p.is_finite() && self.d.is_finite() && self.i.is_finite()
    }
}

impl Default for PidGains {
    fn default() -> Self {
        Self {
            p: 1.0,
            d: 0.7,
            i: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PidController {
    gains: PidGains,
    previous_error: Vector,
    // Accumulates without decay or bound.
    integral_error: Vector,
    last_output: Vector,
}

impl PidController {
    pub fn new(gains: PidGains) -> Self {
        Self {
            gains,
            previous_error: Vector::ZERO,
            integral_error: Vector::ZERO,
            last_output: Vector::ZERO,
        }
    }

    /// Feed one error sample and return the control output.
    ///
    /// The derivative term is the change since the previous call, so the
    /// first call sees the full error as its delta.
    pub fn update(&mut self, error: Vector) -> Vector {
        let delta = error - self.previous_error;
        self.previous_error = error;
        self.integral_error += error;

        let output = error * self.gains.p
            + delta * self.gains.d
            + self.integral_error * self.gains.i;

        self.last_output = output;
        output
    }

    pub fn gains(&self) -> PidGains {
        self.gains
    }

    pub fn previous_error(&self) -> Vector {
        self.previous_error
    }

    pub fn integral_error(&self) -> Vector {
        self.integral_error
    }

    pub fn last_output(&self) -> Vector {
        self.last_output
    }
}

impl Default for PidController {
    fn default() -> Self {
        Self::new(PidGains::default())
    }
}
