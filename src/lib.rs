//! Meshconv provides tools to analyze the mesh convergence of finite element studies
//!
//! Given scalar measurements (e.g., natural frequencies) obtained at successively
//! refined discretization levels, this crate estimates the mesh-converged value and
//! the observed convergence order via Richardson extrapolation, collects and persists
//! the observation series, and compares predictions against published reference data.
//!
//! The expensive solves themselves (mesh generation, assembly, eigenvalue solution)
//! are external: the study driver only invokes a caller-supplied callback once per
//! refinement level.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/meshconv/test";

pub mod convergence;
pub mod prelude;
pub mod util;
