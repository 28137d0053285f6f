use crate::util::ReferenceValues;
use crate::StrError;

/// Compares predicted values against published reference values
///
/// Calculates the relative deviation `|a - b| / |b|` for each pair and returns
/// the maximum deviation found. With `verbose`, prints one line per entry with
/// a mark flagging deviations above `tol`.
///
/// # Input
///
/// * `predicted` -- the predicted (e.g., extrapolated) values
/// * `reference` -- the published values; must be nonzero and as many as the
///   predicted ones
/// * `tol` -- tolerance used to flag entries in the verbose output
/// * `verbose` -- enables the printing of the comparison table
pub fn compare_values(predicted: &[f64], reference: &ReferenceValues, tol: f64, verbose: bool) -> Result<f64, StrError> {
    if predicted.is_empty() {
        return Err("there must be at least one predicted value");
    }
    if predicted.len() != reference.values.len() {
        return Err("the number of predicted values must match the reference data");
    }
    if verbose {
        println!("deviations from {}", reference.name);
        println!("{:>4} {:>18} {:>18} {:>13}", "", "PREDICTED", "REFERENCE", "DEVIATION");
    }
    let mut max_deviation = 0.0;
    for (i, (a, b)) in predicted.iter().zip(reference.values.iter()).enumerate() {
        if *b == 0.0 {
            return Err("reference values must be nonzero");
        }
        let deviation = f64::abs(a - b) / f64::abs(*b);
        if verbose {
            let mrk = if deviation > tol { "❌" } else { "➖" };
            println!("{:>4} {:>18.9} {:>18.9} {:>13.6e}{}", i, a, b, deviation, mrk);
        }
        if deviation > max_deviation {
            max_deviation = deviation;
        }
    }
    Ok(max_deviation)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
