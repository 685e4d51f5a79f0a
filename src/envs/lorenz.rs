use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{LorenzError, Result};

/// Sampling range for the x and y coordinates of a drawn initial state.
pub const XY_RANGE: (f64, f64) = (-15., 15.);
/// Sampling range for the z coordinate of a drawn initial state.
pub const Z_RANGE: (f64, f64) = (5., 55.);

/// Coupling coefficients of the Lorenz system.
///
/// Any finite values are accepted. Non-physical choices only change how the
/// trajectory behaves, they are never corrected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemParameters {
    pub sigma: f64,
    pub beta: f64,
    pub rho: f64,
}

impl Default for SystemParameters {
    fn default() -> Self {
        Self {
            sigma: 10.,
            beta: 8. / 3.,
            rho: 28.,
        }
    }
}

impl SystemParameters {
    pub fn new(sigma: f64, beta: f64, rho: f64) -> Self {
        Self { sigma, beta, rho }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, v) in [("sigma", self.sigma), ("beta", self.beta), ("rho", self.rho)] {
            if !v.is_finite() {
                return Err(LorenzError::invalid(format!(
                    "{} must be finite, got {}",
                    name, v
                )));
            }
        }

        Ok(())
    }

    /// Lorenz vector field at `point`.
    pub fn derivative(&self, point: [f64; 3]) -> [f64; 3] {
        let [x, y, z] = point;

        let dx = self.sigma * (y - x);
        let dy = x * (self.rho - z) - y;
        let dz = x * y - self.beta * z;

        [dx, dy, dz]
    }

    /// One explicit Euler step of size `dt`.
    pub fn euler_step(&self, point: [f64; 3], dt: f64) -> [f64; 3] {
        let [x, y, z] = point;
        let [dx, dy, dz] = self.derivative(point);

        [x + dx * dt, y + dy * dt, z + dz * dt]
    }
}

/// Starting position of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl InitialState {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Draw x0, y0 uniformly from [-15, 15] and z0 from [5, 55].
    pub fn sample(rng: &mut impl Rng) -> Self {
        let x = rng.random_range(XY_RANGE.0..=XY_RANGE.1);
        let y = rng.random_range(XY_RANGE.0..=XY_RANGE.1);
        let z = rng.random_range(Z_RANGE.0..=Z_RANGE.1);

        Self { x, y, z }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for InitialState {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}
