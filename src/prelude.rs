//! Makes available common structures needed to run a convergence analysis
//!
//! You may write `use meshconv::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::convergence::{normalized_errors, richardson};
pub use crate::convergence::{ConvergenceError, ConvergenceSeries, ConvergenceStudy, Extrapolation};
pub use crate::util::{compare_values, ReferenceValues};
pub use crate::DEFAULT_TEST_DIR;
