use crate::convergence::ConvergenceError;

/// Tolerance to accept the refinement ratio as uniform (relative)
const TOL_UNIFORM_RATIO: f64 = 1e-8;

/// Holds the results of a Richardson extrapolation
///
/// The estimates follow the power-law error model
///
/// ```text
/// v(h) ≈ limit + constant · hᵒʳᵈᵉʳ
/// ```
///
/// where `h` is the refinement parameter (proportional to the element size).
#[derive(Clone, Copy, Debug)]
pub struct Extrapolation {
    /// Estimated limiting value as the refinement parameter goes to zero
    pub limit: f64,
    /// Empirical (observed) convergence order
    pub order: f64,
    /// Multiplicative constant of the error model
    pub constant: f64,
}

/// Performs a Richardson extrapolation over three successively refined observations
///
/// Assuming the error model `vᵢ ≈ limit + constant · hᵢᵖ`, three observations at a
/// uniform refinement ratio `r = h₁/h₂ = h₂/h₃` solve for the three unknowns in
/// closed form (see Ref #1, Chapter 5). With the difference ratio
/// `q = (v₁ - v₂)/(v₂ - v₃)` the solution is
///
/// ```text
/// order = ln(q) / ln(r)        (note that rᵒʳᵈᵉʳ = q exactly)
/// limit = v₃ + (v₃ - v₂) / (q - 1)
/// ```
///
/// # Input
///
/// * `values` -- exactly three observations, ordered from the coarsest to the
///   finest discretization
/// * `refinements` -- the corresponding refinement parameters (proportional to
///   the element size); must be positive, strictly decreasing, and uniform in
///   ratio, e.g., `[4.0, 2.0, 1.0]`
///
/// # Notes
///
/// * This function deliberately keeps the narrow three-point closed form; series
///   with more levels or non-uniform ratios are rejected rather than fitted.
/// * A negative `order` is returned (not an error) when the differences grow
///   under refinement, i.e., the series is not yet in the asymptotic regime;
///   the extrapolated `limit` is then meaningless and the caller must refine.
/// * The estimates are only accurate if the observations are in the asymptotic
///   convergence regime; this is the caller's responsibility.
///
/// # Reference
///
/// 1. Roache PJ (1998) Verification and Validation in Computational Science
///    and Engineering, Hermosa Publishers, 464p
pub fn richardson(values: &[f64], refinements: &[f64]) -> Result<Extrapolation, ConvergenceError> {
    if values.len() != 3 {
        return Err(ConvergenceError::WrongSeriesLength { count: values.len() });
    }
    if refinements.len() != values.len() {
        return Err(ConvergenceError::MismatchedLengths {
            n_values: values.len(),
            n_refinements: refinements.len(),
        });
    }
    // note that NaN fails these comparisons
    if !(refinements[2] > 0.0 && refinements[1] > refinements[2] && refinements[0] > refinements[1]) {
        return Err(ConvergenceError::InvalidRefinements {
            refinements: refinements.to_vec(),
        });
    }
    let ratio = refinements[0] / refinements[1];
    let ratio_fine = refinements[1] / refinements[2];
    if f64::abs(ratio - ratio_fine) > TOL_UNIFORM_RATIO * ratio {
        return Err(ConvergenceError::NonUniformRatio {
            first: ratio,
            second: ratio_fine,
        });
    }
    let coarse_diff = values[0] - values[1];
    let fine_diff = values[1] - values[2];
    let q = coarse_diff / fine_diff;
    if coarse_diff == 0.0 || fine_diff == 0.0 || !f64::is_finite(q) || q <= 0.0 || q == 1.0 {
        return Err(ConvergenceError::NonConvergent { coarse_diff, fine_diff });
    }
    let order = f64::ln(q) / f64::ln(ratio);
    let limit = values[2] + (values[2] - values[1]) / (q - 1.0);
    let constant = fine_diff / (f64::powf(refinements[2], order) * (q - 1.0));
    Ok(Extrapolation { limit, order, constant })
}

/// Calculates the error of each observation normalized by the limiting value
///
/// Returns `|vᵢ - limit| / |limit|` for each observation. The limiting value
/// must be nonzero; otherwise the caller has to fall back to absolute errors.
pub fn normalized_errors(values: &[f64], limit: f64) -> Result<Vec<f64>, ConvergenceError> {
    if limit == 0.0 {
        return Err(ConvergenceError::ZeroLimit);
    }
    Ok(values.iter().map(|v| f64::abs(v - limit) / f64::abs(limit)).collect())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{normalized_errors, richardson};
    use crate::convergence::ConvergenceError;
    use russell_lab::{approx_eq, vec_approx_eq};

    #[test]
    fn richardson_captures_malformed_input() {
        assert_eq!(
            richardson(&[1.0, 2.0], &[2.0, 1.0]).err(),
            Some(ConvergenceError::WrongSeriesLength { count: 2 })
        );
        assert_eq!(
            richardson(&[3.0, 2.0, 1.0], &[4.0, 2.0]).err(),
            Some(ConvergenceError::MismatchedLengths {
                n_values: 3,
                n_refinements: 2,
            })
        );
        assert_eq!(
            richardson(&[3.0, 2.0, 1.0], &[4.0, 2.0, 0.0]).err(),
            Some(ConvergenceError::InvalidRefinements {
                refinements: vec![4.0, 2.0, 0.0],
            })
        );
        assert_eq!(
            richardson(&[3.0, 2.0, 1.0], &[1.0, 2.0, 4.0]).err(),
            Some(ConvergenceError::InvalidRefinements {
                refinements: vec![1.0, 2.0, 4.0],
            })
        );
        assert_eq!(
            richardson(&[3.0, 2.0, 1.0], &[9.0, 3.0, 2.0]).err(),
            Some(ConvergenceError::NonUniformRatio { first: 3.0, second: 1.5 })
        );
        assert!(matches!(
            richardson(&[3.0, 2.0, 1.0], &[f64::NAN, 2.0, 1.0]).err(),
            Some(ConvergenceError::InvalidRefinements { .. })
        ));
    }

    #[test]
    fn richardson_captures_non_convergent_series() {
        // repeated coarse observations
        assert_eq!(
            richardson(&[1.0, 1.0, 0.5], &[4.0, 2.0, 1.0]).err(),
            Some(ConvergenceError::NonConvergent {
                coarse_diff: 0.0,
                fine_diff: 0.5,
            })
        );
        // repeated fine observations
        assert_eq!(
            richardson(&[2.0, 1.0, 1.0], &[4.0, 2.0, 1.0]).err(),
            Some(ConvergenceError::NonConvergent {
                coarse_diff: 1.0,
                fine_diff: 0.0,
            })
        );
        // oscillating observations
        assert_eq!(
            richardson(&[1.0, 2.0, 1.5], &[4.0, 2.0, 1.0]).err(),
            Some(ConvergenceError::NonConvergent {
                coarse_diff: -1.0,
                fine_diff: 0.5,
            })
        );
        // stalled differences
        assert_eq!(
            richardson(&[3.0, 2.0, 1.0], &[4.0, 2.0, 1.0]).err(),
            Some(ConvergenceError::NonConvergent {
                coarse_diff: 1.0,
                fine_diff: 1.0,
            })
        );
    }

    #[test]
    fn richardson_is_exact_on_power_law_data() {
        let (tt, cc, p0) = (10.0, 3.0, 1.8);
        let hh = [1.0, 0.5, 0.25];
        let values: Vec<_> = hh.iter().map(|h| tt + cc * f64::powf(*h, p0)).collect();
        let res = richardson(&values, &hh).unwrap();
        approx_eq(res.limit, tt, 1e-9);
        approx_eq(res.order, p0, 1e-9);
        approx_eq(res.constant, cc, 1e-9);
    }

    #[test]
    fn richardson_is_invariant_under_refinement_scaling() {
        let (tt, cc, p0) = (-2.5, 0.7, 2.0);
        let hh = [4.0, 2.0, 1.0];
        let values: Vec<_> = hh.iter().map(|h| tt + cc * f64::powf(*h, p0)).collect();
        let scaled: Vec<_> = hh.iter().map(|h| h * 0.37).collect();
        let a = richardson(&values, &hh).unwrap();
        let b = richardson(&values, &scaled).unwrap();
        approx_eq(a.limit, b.limit, 1e-14);
        approx_eq(a.order, b.order, 1e-14);
        // only the constant absorbs the scaling
        approx_eq(b.constant * f64::powf(0.37, b.order), a.constant, 1e-14);
    }

    #[test]
    fn ring_frequencies_regression() {
        // eigenfrequencies of a solid ring at three mesh resolutions
        let res = richardson(&[52.9, 52.4, 52.3], &[4.0, 2.0, 1.0]).unwrap();
        approx_eq(res.limit, 52.275, 1e-12);
        approx_eq(res.order, f64::ln(5.0) / f64::ln(2.0), 1e-12);
        assert!(res.limit < 52.3);
    }

    #[test]
    fn normalized_errors_works() {
        let errors = normalized_errors(&[90.0, 95.0, 99.0], 100.0).unwrap();
        vec_approx_eq(&errors, &[0.1, 0.05, 0.01], 1e-15);
    }

    #[test]
    fn normalized_errors_captures_zero_limit() {
        assert_eq!(normalized_errors(&[1.0, 2.0], 0.0).err(), Some(ConvergenceError::ZeroLimit));
    }
}
