use crate::convergence::{ConvergenceError, ConvergenceSeries};
use crate::StrError;
use russell_lab::{format_nanoseconds, Stopwatch};

/// Runs one solve per refinement level and collects the observation series
///
/// This drives the repetitive part of a mesh refinement study: call the
/// (external, expensive) solver once per level, from the coarsest to the
/// finest mesh, time each solve, and accumulate the measurements. The solver
/// itself is a caller-supplied callback; this structure knows nothing about
/// meshes or eigenproblems.
pub struct ConvergenceStudy {
    name: String,
    refinements: Vec<f64>,
    verbose: bool,
}

impl ConvergenceStudy {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `name` -- identifier of the study (stored in the resulting series)
    /// * `refinements` -- refinement parameter per level; must be positive and
    ///   strictly decreasing (coarsest level first), e.g., `[4.0, 2.0, 1.0]`
    pub fn new(name: &str, refinements: &[f64]) -> Result<Self, ConvergenceError> {
        let n = refinements.len();
        let mut ok = n > 0 && refinements[n - 1] > 0.0;
        for i in 1..n {
            // note that NaN fails this comparison
            if !(refinements[i] < refinements[i - 1]) {
                ok = false;
            }
        }
        if !ok {
            return Err(ConvergenceError::InvalidRefinements {
                refinements: refinements.to_vec(),
            });
        }
        Ok(ConvergenceStudy {
            name: name.to_string(),
            refinements: refinements.to_vec(),
            verbose: false,
        })
    }

    /// Enables the printing of a progress table while the study runs
    pub fn set_verbose(&mut self, verbose: bool) -> &mut Self {
        self.verbose = verbose;
        self
    }

    /// Runs the study and returns the collected observation series
    ///
    /// # Input
    ///
    /// * `solve` -- callback invoked once per refinement level with the
    ///   refinement parameter; returns the total number of DOF and the
    ///   measured value, or a message describing the solver failure
    pub fn run<F>(&self, mut solve: F) -> Result<ConvergenceSeries, ConvergenceError>
    where
        F: FnMut(f64) -> Result<(usize, f64), StrError>,
    {
        let n = self.refinements.len();
        let mut series = ConvergenceSeries::new(n);
        series.name = self.name.clone();
        if self.verbose {
            println!("running {}", self.name);
            println!("{:>15} {:>8} {:>10} {:>18}", "TIME", "NDOF", "H", "VALUE");
        }
        for (idx, h) in self.refinements.iter().enumerate() {
            let mut stopwatch = Stopwatch::new();
            let (ndof, value) = solve(*h).map_err(ConvergenceError::Solver)?;
            series.time[idx] = stopwatch.stop();
            series.ndof[idx] = ndof;
            series.refinement[idx] = *h;
            series.values[idx] = value;
            if self.verbose {
                let ns = format_nanoseconds(series.time[idx]);
                println!("{:>15} {:>8} {:>10} {:>18.9}", ns, ndof, h, value);
            }
        }
        Ok(series)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ConvergenceStudy;
    use crate::convergence::ConvergenceError;
    use russell_lab::vec_approx_eq;

    #[test]
    fn study_new_captures_invalid_refinements() {
        assert_eq!(
            ConvergenceStudy::new("bad", &[]).err(),
            Some(ConvergenceError::InvalidRefinements { refinements: vec![] })
        );
        assert_eq!(
            ConvergenceStudy::new("bad", &[1.0, 2.0, 4.0]).err(),
            Some(ConvergenceError::InvalidRefinements {
                refinements: vec![1.0, 2.0, 4.0],
            })
        );
        assert_eq!(
            ConvergenceStudy::new("bad", &[2.0, 1.0, -1.0]).err(),
            Some(ConvergenceError::InvalidRefinements {
                refinements: vec![2.0, 1.0, -1.0],
            })
        );
    }

    #[test]
    fn study_runs_and_collects_observations() {
        let study = ConvergenceStudy::new("axial_rod", &[4.0, 2.0, 1.0]).unwrap();
        let mut n_calls = 0;
        let series = study
            .run(|h| {
                n_calls += 1;
                let n_elements = (64.0 / h) as usize;
                Ok((n_elements, 10.0 + h))
            })
            .unwrap();
        assert_eq!(n_calls, 3);
        assert_eq!(series.name, "axial_rod");
        assert_eq!(series.ndof, &[16, 32, 64]);
        vec_approx_eq(&series.refinement, &[4.0, 2.0, 1.0], 1e-15);
        vec_approx_eq(&series.values, &[14.0, 12.0, 11.0], 1e-15);
    }

    #[test]
    fn study_propagates_solver_failure() {
        let study = ConvergenceStudy::new("failing", &[4.0, 2.0, 1.0]).unwrap();
        let res = study.run(|_| Err("eigensolver failed"));
        assert_eq!(res.err(), Some(ConvergenceError::Solver("eigensolver failed")));
    }
}
