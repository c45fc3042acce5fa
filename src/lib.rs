//! # synthfit
//!
//! Synthetic 1D linear data generation and closed-form least-squares
//! evaluation.
//!
//! The crate covers the full synthetic-data-to-model loop: draw noisy
//! samples of `y = a*x + b`, split them by index into train and test
//! subsets, fit a simple linear model by ordinary least squares, and
//! report MSE and R² metrics. Everything is a pure function over
//! immutable inputs; generation seeds its own PRNG per call, so the
//! same parameters always reproduce the same data.
//!
//! ## Example
//!
//! ```
//! use synthfit::prelude::*;
//!
//! let params = GenerationParameters::new(2.0, 1.0, 100, 1.0, 42);
//! let samples = generate(&params)?;
//! let (train, test) = train_test_split(&samples, 0.2)?;
//! let result = fit_and_evaluate(&train, &test, true)?;
//!
//! assert!((result.coef - 2.0).abs() < 0.5);
//! assert!(result.test_mse.is_some());
//! # Ok::<(), synthfit::error::SynthFitError>(())
//! ```

pub mod error;
pub mod regression;
pub mod synthesis;
pub mod types;

pub mod prelude {
    //! Convenient re-exports of commonly used types.
    pub use crate::error::{Result, SynthFitError};
    pub use crate::regression::{FitResult, fit_and_evaluate};
    pub use crate::synthesis::{GenerationParameters, generate, train_test_split};
    pub use crate::types::SampleSet;
}
