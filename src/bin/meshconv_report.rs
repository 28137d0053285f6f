use meshconv::prelude::*;
use russell_lab::format_nanoseconds;
use std::error::Error;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "meshconv_report",
    about = "Extrapolates mesh refinement series and prints a convergence report"
)]
struct Options {
    /// Paths to convergence series JSON files (one per tracked quantity)
    series: Vec<String>,

    /// Path to a reference values JSON file to compare the predictions against
    #[structopt(long)]
    reference: Option<String>,

    /// Tolerance used to flag deviations from the reference values
    #[structopt(long, default_value = "0.01")]
    tol: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    // parse options
    let options = Options::from_args();
    if options.series.is_empty() {
        return Err("at least one series file is required".into());
    }

    // extrapolate each series
    let mut predictions = Vec::new();
    for path in &options.series {
        let series = ConvergenceSeries::read_json(path)?;
        let extrapolation = series.extrapolate()?;
        let errors = series.normalized_errors(extrapolation.limit)?;

        // per-level table
        let thin_line = format!("{:─^1$}", "", 66);
        println!("{}", thin_line);
        println!("{}", series.name);
        println!("{}", thin_line);
        println!("{:>15} {:>8} {:>10} {:>18} {:>11}", "TIME", "NDOF", "H", "VALUE", "ERROR");
        for i in 0..series.values.len() {
            println!(
                "{:>15} {:>8} {:>10} {:>18.9} {:>11.4e}",
                format_nanoseconds(series.time[i]),
                series.ndof[i],
                series.refinement[i],
                series.values[i],
                errors[i]
            );
        }
        println!(
            "predicted limit = {:.9} (order = {:.3})",
            extrapolation.limit, extrapolation.order
        );
        predictions.push(extrapolation.limit);
    }

    // compare the predictions against the reference values
    if let Some(path) = &options.reference {
        let reference = ReferenceValues::read_json(path)?;
        println!();
        let max_deviation = compare_values(&predictions, &reference, options.tol, true)?;
        println!("max deviation = {:.6e}", max_deviation);
    }
    Ok(())
}
