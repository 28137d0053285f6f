use crate::StrError;
use thiserror::Error;

/// Error returned when a convergence analysis fails
///
/// The variants carry the offending raw values so callers can diagnose the
/// series (e.g., supply a finer discretization) instead of receiving NaN.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConvergenceError {
    /// Returned when the series does not hold exactly three observations
    #[error("the closed-form extrapolation requires exactly three observations (received {count})")]
    WrongSeriesLength {
        /// Number of observations received
        count: usize,
    },
    /// Returned when values and refinement parameters have different lengths
    #[error("values and refinement parameters must have the same length (received {n_values} and {n_refinements})")]
    MismatchedLengths {
        /// Number of values received
        n_values: usize,
        /// Number of refinement parameters received
        n_refinements: usize,
    },
    /// Returned when refinement parameters are non-positive or not strictly decreasing
    #[error("refinement parameters must be positive and strictly decreasing (received {refinements:?})")]
    InvalidRefinements {
        /// Rejected refinement parameters, in the order received
        refinements: Vec<f64>,
    },
    /// Returned when the refinement ratio is not constant across levels
    #[error("the refinement ratio must be uniform across levels (received {first} and {second})")]
    NonUniformRatio {
        /// Ratio between the coarse and intermediate levels
        first: f64,
        /// Ratio between the intermediate and fine levels
        second: f64,
    },
    /// Returned when the successive differences admit no power-law error model
    ///
    /// This indicates stalled, repeated, or oscillating observations; the raw
    /// differences are attached for diagnosis.
    #[error("successive differences do not indicate convergence (coarse: {coarse_diff}, fine: {fine_diff})")]
    NonConvergent {
        /// Difference between the coarse and intermediate values
        coarse_diff: f64,
        /// Difference between the intermediate and fine values
        fine_diff: f64,
    },
    /// Returned when normalizing errors by a zero limiting value
    #[error("cannot normalize errors because the limiting value is zero")]
    ZeroLimit,
    /// Returned when the solver callback of a refinement study fails
    #[error("the solver callback failed: {0}")]
    Solver(StrError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
