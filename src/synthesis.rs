//! Synthetic data generation for the linear regression workflow.
//!
//! Samples are drawn from `y = a*x + b + e` with x uniform on [-10, 10]
//! and e Gaussian with mean 0. Generation is a pure function of its
//! parameters: the generator is seeded per call, so the same parameters
//! always reproduce the same samples bit for bit.

use crate::error::{Result, SynthFitError};
use crate::types::SampleSet;
use ndarray::Array1;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution as RandDistribution, Normal};
use serde::{Deserialize, Serialize};

/// Lower bound of the x sampling interval.
pub const X_MIN: f64 = -10.0;
/// Upper bound of the x sampling interval.
pub const X_MAX: f64 = 10.0;

/// Parameters for synthetic linear data generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    /// True slope.
    pub a: f64,
    /// True intercept.
    pub b: f64,
    /// Number of samples to draw.
    pub n: usize,
    /// Standard deviation of the additive Gaussian noise.
    pub noise: f64,
    /// PRNG seed. Any integer is valid, including negative values.
    pub seed: i64,
}

impl GenerationParameters {
    /// Create generation parameters. Validation happens in [`generate`].
    pub fn new(a: f64, b: f64, n: usize, noise: f64, seed: i64) -> Self {
        Self {
            a,
            b,
            n,
            noise,
            seed,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.n < 1 {
            return Err(SynthFitError::InvalidParameter(
                "n must be at least 1".to_string(),
            ));
        }
        if !self.noise.is_finite() || self.noise < 0.0 {
            return Err(SynthFitError::InvalidParameter(format!(
                "noise must be finite and non-negative, got {}",
                self.noise
            )));
        }
        if !self.a.is_finite() || !self.b.is_finite() {
            return Err(SynthFitError::InvalidParameter(format!(
                "slope and intercept must be finite, got a={}, b={}",
                self.a, self.b
            )));
        }
        Ok(())
    }
}

/// Generate `params.n` noisy samples of `y = a*x + b`.
///
/// The generator is a `ChaCha8Rng` seeded from `params.seed` via a
/// two's-complement cast to `u64`. All x values are drawn first,
/// uniformly over the closed interval [`X_MIN`, `X_MAX`], then all
/// noise values from `Normal(0, noise)`; sample i pairs the i-th x
/// draw with the i-th noise draw. This ordering is part of the
/// determinism contract: within one build, identical parameters yield
/// a bit-identical `SampleSet`.
///
/// # Errors
///
/// Returns `InvalidParameter` if `n < 1`, `noise` is negative or
/// non-finite, or `a`/`b` are non-finite.
pub fn generate(params: &GenerationParameters) -> Result<SampleSet> {
    params.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(params.seed as u64);

    let x: Array1<f64> =
        Array1::from_iter((0..params.n).map(|_| rng.random_range(X_MIN..=X_MAX)));

    let normal = Normal::new(0.0, params.noise)
        .map_err(|e| SynthFitError::InvalidParameter(format!("noise distribution: {e}")))?;
    let noise: Array1<f64> = Array1::from_iter((0..params.n).map(|_| normal.sample(&mut rng)));

    let y = params.a * &x + params.b + noise;
    SampleSet::new(x, y)
}

/// Partition a sample set into train and test subsets by index.
///
/// The first `floor(n * (1 - test_ratio))` samples become the training
/// set and the remainder the test set. No shuffling takes place; the
/// caller is expected to pass data whose order already carries no
/// meaning (as `generate` produces).
///
/// # Arguments
///
/// * `samples` - The set to partition; not mutated.
/// * `test_ratio` - Fraction of samples held out for testing, in [0, 0.9).
///
/// # Errors
///
/// Returns `InvalidParameter` if `test_ratio` is outside [0, 0.9).
pub fn train_test_split(samples: &SampleSet, test_ratio: f64) -> Result<(SampleSet, SampleSet)> {
    if !(0.0..0.9).contains(&test_ratio) {
        return Err(SynthFitError::InvalidParameter(format!(
            "test_ratio must be in [0, 0.9), got {test_ratio}"
        )));
    }
    let split_idx = (samples.len() as f64 * (1.0 - test_ratio)).floor() as usize;
    samples.split_at(split_idx)
}
