//! Error type shared by the integrator, trajectory views and run configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LorenzError {
    /// A step count, time step, coefficient or frame stride that cannot produce a trajectory.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Reading a run configuration file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A run configuration file was not valid JSON for [`crate::config::RunConfig`]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LorenzError>;

impl LorenzError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}
