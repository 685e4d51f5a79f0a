//! Fixed-step explicit Euler integration of the Lorenz system.
//!
//! ```rust
//! use lorenz::integrate::{StepConfig, integrate};
//! use lorenz::envs::lorenz::{InitialState, SystemParameters};
//!
//! let t = integrate(
//!     &SystemParameters::default(),
//!     &StepConfig::new(2, 0.01),
//!     Some(InitialState::new(1., 1., 1.)),
//! )?;
//! assert_eq!(t.len(), 2);
//! # Ok::<(), lorenz::error::LorenzError>(())
//! ```

use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    envs::lorenz::{InitialState, SystemParameters},
    error::{LorenzError, Result},
    trajectory::Trajectory,
};

/// Number of samples and the time step between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepConfig {
    pub n: usize,
    pub dt: f64,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self { n: 10_000, dt: 0.01 }
    }
}

impl StepConfig {
    pub fn new(n: usize, dt: f64) -> Self {
        Self { n, dt }
    }

    /// `n` must be at least 1 and `dt` a finite positive number. Large `dt` is
    /// accepted even when the scheme diverges.
    pub fn validate(&self) -> Result<()> {
        if self.n < 1 {
            return Err(LorenzError::invalid("step count must be at least 1"));
        }

        if !self.dt.is_finite() || self.dt <= 0. {
            return Err(LorenzError::invalid(format!(
                "time step must be finite and positive, got {}",
                self.dt
            )));
        }

        Ok(())
    }
}

/// Integrate with the thread-local RNG used for the initial state when none is given.
pub fn integrate(
    params: &SystemParameters,
    config: &StepConfig,
    initial: Option<InitialState>,
) -> Result<Trajectory> {
    integrate_with_rng(params, config, initial, &mut rand::rng())
}

/// Integrate `config.n` points starting from `initial`, or from a state drawn
/// once from `rng` when `initial` is `None`.
///
/// Non-finite values produced by a diverging run are kept as they are.
pub fn integrate_with_rng(
    params: &SystemParameters,
    config: &StepConfig,
    initial: Option<InitialState>,
    rng: &mut impl Rng,
) -> Result<Trajectory> {
    params.validate()?;
    config.validate()?;

    let initial = initial.unwrap_or_else(|| InitialState::sample(rng));

    debug!(
        sigma = params.sigma,
        beta = params.beta,
        rho = params.rho,
        n = config.n,
        dt = config.dt,
        x0 = initial.x,
        y0 = initial.y,
        z0 = initial.z,
        "integrating lorenz trajectory"
    );

    let mut points = Array2::zeros((config.n, 3));
    let mut state = initial.to_array();

    for (i, mut row) in points.rows_mut().into_iter().enumerate() {
        if i > 0 {
            state = params.euler_step(state, config.dt);
        }

        row[0] = state[0];
        row[1] = state[1];
        row[2] = state[2];
    }

    let trajectory = Trajectory::from_array(points);

    if let Some(i) = trajectory.first_non_finite() {
        warn!(index = i, "trajectory diverged to non-finite values");
    }

    Ok(trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    use crate::envs::lorenz::{XY_RANGE, Z_RANGE};

    fn unit() -> Option<InitialState> {
        Some(InitialState::new(1., 1., 1.))
    }

    #[test]
    fn single_step_from_unit_point() {
        let t = integrate(&SystemParameters::default(), &StepConfig::new(2, 0.01), unit()).unwrap();

        assert_eq!(t.len(), 2);
        assert_eq!(t.first(), Some([1., 1., 1.]));

        let [x, y, z] = t.point(1).unwrap();
        assert_eq!(x, 1. + 10. * (1. - 1.) * 0.01);
        assert_eq!(y, 1. + (1. * (28. - 1.) - 1.) * 0.01);
        assert_eq!(z, 1. + (1. * 1. - (8. / 3.) * 1.) * 0.01);

        assert_relative_eq!(y, 1.26, epsilon = 1e-12);
        assert_relative_eq!(z, 0.983_333_333_333_333_3, epsilon = 1e-12);
    }

    #[test]
    fn one_point_is_the_initial_state() {
        let t = integrate(&SystemParameters::default(), &StepConfig::new(1, 0.01), unit()).unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t.first(), Some([1., 1., 1.]));
        assert_eq!(t.frame_count(50).unwrap(), 0);
    }

    #[test]
    fn zero_steps_rejected() {
        let err = integrate(&SystemParameters::default(), &StepConfig::new(0, 0.01), unit());
        assert!(matches!(err, Err(LorenzError::InvalidConfiguration(_))));
    }

    #[test]
    fn bad_time_steps_rejected() {
        for dt in [0., -0.01, f64::NAN, f64::INFINITY] {
            let err = integrate(&SystemParameters::default(), &StepConfig::new(10, dt), unit());
            assert!(
                matches!(err, Err(LorenzError::InvalidConfiguration(_))),
                "dt={}",
                dt
            );
        }
    }

    #[test]
    fn non_finite_parameters_rejected() {
        let params = SystemParameters::new(10., f64::NAN, 28.);
        assert!(integrate(&params, &StepConfig::default(), unit()).is_err());
    }

    #[test]
    fn identical_inputs_are_bit_identical() {
        let params = SystemParameters::default();
        let config = StepConfig::new(5_000, 0.01);
        let initial = Some(InitialState::new(-3.2, 7.9, 21.4));

        let a = integrate(&params, &config, initial).unwrap();
        let b = integrate(&params, &config, initial).unwrap();

        assert!(
            a.points()
                .zip(b.points())
                .all(|(p, q)| p.iter().zip(q.iter()).all(|(u, v)| u.to_bits() == v.to_bits()))
        );
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let params = SystemParameters::default();
        let config = StepConfig::new(100, 0.01);

        let a = integrate_with_rng(&params, &config, None, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = integrate_with_rng(&params, &config, None, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn explicit_initial_state_ignores_rng() {
        let params = SystemParameters::default();
        let config = StepConfig::new(10, 0.01);

        let a = integrate_with_rng(&params, &config, unit(), &mut StdRng::seed_from_u64(1)).unwrap();
        let b = integrate_with_rng(&params, &config, unit(), &mut StdRng::seed_from_u64(2)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn large_dt_diverges_without_error() {
        let t = integrate(&SystemParameters::default(), &StepConfig::new(2_000, 1.0), unit()).unwrap();

        assert_eq!(t.len(), 2_000);
        assert!(!t.is_finite());
        assert_eq!(t.first(), Some([1., 1., 1.]));
    }

    #[test]
    fn drawn_initial_state_is_point_zero_and_in_range() {
        let mut rng = StdRng::seed_from_u64(9);

        for _ in 0..200 {
            let t = integrate_with_rng(
                &SystemParameters::default(),
                &StepConfig::new(1, 0.01),
                None,
                &mut rng,
            )
            .unwrap();
            let [x, y, z] = t.first().unwrap();

            assert!((XY_RANGE.0..=XY_RANGE.1).contains(&x));
            assert!((XY_RANGE.0..=XY_RANGE.1).contains(&y));
            assert!((Z_RANGE.0..=Z_RANGE.1).contains(&z));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn default_configuration_stays_finite(
            x in XY_RANGE.0..=XY_RANGE.1,
            y in XY_RANGE.0..=XY_RANGE.1,
            z in Z_RANGE.0..=Z_RANGE.1,
        ) {
            let t = integrate(
                &SystemParameters::default(),
                &StepConfig::default(),
                Some(InitialState::new(x, y, z)),
            ).unwrap();

            prop_assert_eq!(t.len(), 10_000);
            prop_assert_eq!(t.first(), Some([x, y, z]));
            prop_assert!(t.is_finite());
        }

        #[test]
        fn length_matches_step_count(n in 1usize..2_000, dt in 1e-4f64..0.05) {
            let t = integrate(&SystemParameters::default(), &StepConfig::new(n, dt), None).unwrap();
            prop_assert_eq!(t.len(), n);
        }
    }
}
