use crate::convergence::{normalized_errors, richardson, ConvergenceError, Extrapolation};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the observations of a convergence analysis with varying mesh sizes
///
/// The levels are ordered from the coarsest to the finest discretization.
#[derive(Serialize, Deserialize)]
pub struct ConvergenceSeries {
    pub name: String,         // name of the study / mesh family
    pub time: Vec<u128>,      // solve time in nanoseconds
    pub ndof: Vec<usize>,     // total number of DOF
    pub refinement: Vec<f64>, // refinement parameter (element size multiplier)
    pub values: Vec<f64>,     // measured quantity (e.g., frequency)
}

impl ConvergenceSeries {
    /// Allocates a new structure
    pub fn new(n_levels: usize) -> Self {
        ConvergenceSeries {
            name: String::from("unknown"),
            time: vec![0; n_levels],
            ndof: vec![0; n_levels],
            refinement: vec![0.0; n_levels],
            values: vec![0.0; n_levels],
        }
    }

    /// Reads a JSON file containing the observations
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let series = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(series)
    }

    /// Writes a JSON file with the observations
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }

    /// Estimates the mesh-converged value and the observed convergence order
    ///
    /// Delegates to [richardson]; thus the series must hold exactly three levels
    /// at a uniform refinement ratio.
    pub fn extrapolate(&self) -> Result<Extrapolation, ConvergenceError> {
        richardson(&self.values, &self.refinement)
    }

    /// Calculates the error of each observation normalized by the limiting value
    pub fn normalized_errors(&self, limit: f64) -> Result<Vec<f64>, ConvergenceError> {
        normalized_errors(&self.values, limit)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
