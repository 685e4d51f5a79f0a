//! Explicit Euler integration of the Lorenz attractor.
//!
//! [`integrate::integrate`] is a pure function of its inputs (apart from an
//! optional initial-state draw) returning an owned [`trajectory::Trajectory`].
//! Rendering lives in [`util::graph`] and only ever reads trajectories.

pub mod cli;
pub mod config;
pub mod envs;
pub mod error;
pub mod integrate;
pub mod logging;
pub mod trajectory;
pub mod util;

pub mod prelude {
    pub use crate::envs::lorenz::{InitialState, SystemParameters};
    pub use crate::error::{LorenzError, Result};
    pub use crate::integrate::{StepConfig, integrate, integrate_with_rng};
    pub use crate::trajectory::Trajectory;
}
