//! Core data types for representing sample data.

use crate::error::{Result, SynthFitError};
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

/// An ordered collection of (x, y) sample pairs.
///
/// Samples are stored as two parallel columns. The pairing is positional:
/// `x()[i]` belongs with `y()[i]`. A `SampleSet` is constructed once and
/// never mutated; splitting produces new owned sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    x: Array1<f64>,
    y: Array1<f64>,
}

impl SampleSet {
    /// Create a sample set from parallel x and y columns.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the columns differ in length.
    pub fn new(x: Array1<f64>, y: Array1<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(SynthFitError::InvalidParameter(format!(
                "x and y must have equal length, got {} and {}",
                x.len(),
                y.len()
            )));
        }
        Ok(Self { x, y })
    }

    /// An empty sample set, usable as the "no test data" argument.
    pub fn empty() -> Self {
        Self {
            x: Array1::zeros(0),
            y: Array1::zeros(0),
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// View of the x column.
    pub fn x(&self) -> ArrayView1<'_, f64> {
        self.x.view()
    }

    /// View of the y column.
    pub fn y(&self) -> ArrayView1<'_, f64> {
        self.y.view()
    }

    /// Iterate over (x, y) pairs in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Split into two owned sets at `idx`: the first `idx` samples and
    /// the remainder. Order is preserved, nothing is shuffled.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `idx` exceeds the length.
    pub fn split_at(&self, idx: usize) -> Result<(Self, Self)> {
        if idx > self.len() {
            return Err(SynthFitError::InvalidParameter(format!(
                "split index {} out of range for {} samples",
                idx,
                self.len()
            )));
        }
        let (x_head, x_tail) = self.x.view().split_at(ndarray::Axis(0), idx);
        let (y_head, y_tail) = self.y.view().split_at(ndarray::Axis(0), idx);
        Ok((
            Self {
                x: x_head.to_owned(),
                y: y_head.to_owned(),
            },
            Self {
                x: x_tail.to_owned(),
                y: y_tail.to_owned(),
            },
        ))
    }
}
