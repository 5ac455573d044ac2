//! Simple linear regression on a small literal dataset.
//!
//! Prints the summary statistics of both columns, the fitted coefficients,
//! and the RMSE of the line when the dataset is used as its own test set.
//!
//! Expected output:
//!
//! ```text
//! x stats: mean=3.000 variance=10.000
//! y stats: mean=2.800 variance=8.800
//! Coefficients: B0=0.400, B1=0.800
//! RMSE: 0.693
//! ```
//!
//! Run with `RUST_LOG=debug` to see the pipeline trace.

use linreg::prelude::*;

const DATASET: [[f64; 2]; 5] = [[1.0, 1.0], [2.0, 3.0], [4.0, 3.0], [3.0, 2.0], [5.0, 5.0]];

fn main() -> Result<(), RegressionError> {
    env_logger::init();

    let dataset = Dataset::from_rows(&DATASET);

    let x_stats = SummaryStats::of(dataset.x())?;
    let y_stats = SummaryStats::of(dataset.y())?;
    println!("x stats: {}", x_stats);
    println!("y stats: {}", y_stats);

    let coefficients = Coefficients::estimate(&dataset)?;
    println!("Coefficients: {}", coefficients);

    let rmse = evaluate_algorithm(&dataset, simple_linear_regression)?;
    println!("RMSE: {:.3}", rmse);

    Ok(())
}
