use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::{
    config::RunConfig,
    envs::lorenz::InitialState,
    error::{LorenzError, Result},
};

/// Integrate the Lorenz attractor and view it as a 3-D plot
#[derive(Parser, Debug)]
#[command(name = "lorenz")]
#[command(version)]
pub struct Cli {
    /// JSON run configuration; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub sigma: Option<f64>,

    #[arg(long)]
    pub beta: Option<f64>,

    #[arg(long)]
    pub rho: Option<f64>,

    /// Number of points in the trajectory
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,

    #[arg(long)]
    pub dt: Option<f64>,

    /// Start from X Y Z instead of a random draw
    #[arg(
        long,
        num_args = 3,
        value_names = ["X", "Y", "Z"],
        allow_negative_numbers = true,
        action = ArgAction::Set
    )]
    pub initial: Option<Vec<f64>>,

    /// Seed for the random initial state
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub frame_stride: Option<usize>,

    /// Show only this animation frame (a prefix of the trajectory)
    #[arg(long)]
    pub frame: Option<usize>,

    /// Integrate and log a summary without opening the plot
    #[arg(long)]
    pub no_show: bool,
}

impl Cli {
    /// Merge flags over the configuration file (or defaults).
    pub fn run_config(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };

        if let Some(v) = self.sigma {
            config.params.sigma = v;
        }
        if let Some(v) = self.beta {
            config.params.beta = v;
        }
        if let Some(v) = self.rho {
            config.params.rho = v;
        }
        if let Some(v) = self.steps {
            config.steps.n = v;
        }
        if let Some(v) = self.dt {
            config.steps.dt = v;
        }
        if let Some(values) = self.initial.as_deref() {
            let [x, y, z] = <[f64; 3]>::try_from(values).map_err(|_| {
                LorenzError::invalid(format!(
                    "--initial takes exactly 3 values, got {}",
                    values.len()
                ))
            })?;
            config.initial = Some(InitialState::new(x, y, z));
        }
        if let Some(v) = self.seed {
            config.seed = Some(v);
        }
        if let Some(v) = self.frame_stride {
            config.frame_stride = v;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrate::StepConfig;

    #[test]
    fn defaults_without_flags() {
        let cli = Cli::parse_from(["lorenz"]);
        assert_eq!(cli.run_config().unwrap(), RunConfig::default());
    }

    #[test]
    fn flags_override() {
        let cli = Cli::parse_from([
            "lorenz", "--rho", "14", "-n", "500", "--dt", "0.005", "--initial", "-1", "2.5", "30",
            "--seed", "4",
        ]);
        let c = cli.run_config().unwrap();

        assert_eq!(c.params.rho, 14.);
        assert_eq!(c.steps, StepConfig::new(500, 0.005));
        assert_eq!(c.initial, Some(InitialState::new(-1., 2.5, 30.)));
        assert_eq!(c.seed, Some(4));
    }

    #[test]
    fn zero_steps_rejected() {
        let cli = Cli::parse_from(["lorenz", "-n", "0"]);
        assert!(cli.run_config().is_err());
    }

    #[test]
    fn repeated_initial_keeps_the_last() {
        let cli = Cli::try_parse_from([
            "lorenz", "--initial", "1", "2", "3", "--initial", "4", "5", "6",
        ])
        .unwrap();

        assert_eq!(
            cli.run_config().unwrap().initial,
            Some(InitialState::new(4., 5., 6.))
        );
    }

    #[test]
    fn wrong_initial_length_is_an_error() {
        let cli = Cli {
            initial: Some(vec![1., 2., 3., 4.]),
            ..Cli::parse_from(["lorenz"])
        };

        assert!(matches!(
            cli.run_config(),
            Err(LorenzError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn initial_needs_three_values() {
        assert!(Cli::try_parse_from(["lorenz", "--initial", "1", "2"]).is_err());
    }
}
