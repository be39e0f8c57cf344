//! Time-lag estimation between two recordings.

use super::common::{output_stem, print_metadata, results_dir};
use crate::plot;
use clap::Args;
use desfase_analysis::correlate;
use desfase_io::{Format, decode};
use std::path::PathBuf;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// First audio file
    #[arg(value_name = "ONE")]
    one: PathBuf,

    /// Second audio file
    #[arg(value_name = "TWO")]
    two: PathBuf,

    /// Write a JSON report of the metrics
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let format_one = Format::from_path(&args.one)?;
    let format_two = Format::from_path(&args.two)?;

    tracing::info!(one = %args.one.display(), two = %args.two.display(), "decoding inputs");
    let buffer_one = decode(&args.one)?;
    let buffer_two = decode(&args.two)?;

    print_metadata("one", &buffer_one, format_one);
    print_metadata("two", &buffer_two, format_two);

    let result = correlate(&buffer_one, &buffer_two)?;
    tracing::info!(
        length = result.values.len(),
        peak_index = result.peak_index,
        "correlation computed"
    );

    let banner = "*".repeat(70);
    println!("{banner}");
    println!("* Results");
    println!("{banner}");
    println!("Max absolute correlation: {}", result.peak_magnitude());
    println!(
        "Arg max absolute correlation (lag): {} seconds",
        result.peak_lag_seconds
    );
    println!(
        "Lag axis: {:.6} to {:.6} seconds",
        result.lag_seconds_at(0),
        result.lag_seconds_at(result.values.len() - 1)
    );
    println!("{banner}");

    let dir = results_dir()?;
    let plot_path = dir.join(format!(
        "{}_vs_{}_correlation.pgm",
        output_stem(&args.one),
        output_stem(&args.two)
    ));
    plot::render(
        &plot_path,
        &[
            vec![buffer_one.samples(), buffer_two.samples()],
            vec![result.values.as_slice()],
        ],
    )?;
    println!("Wrote correlation graph to {}", plot_path.display());

    if let Some(report_path) = args.output {
        let report = serde_json::json!({
            "one": args.one.to_string_lossy(),
            "two": args.two.to_string_lossy(),
            "sample_rate": result.sample_rate,
            "correlation_length": result.values.len(),
            "peak_index": result.peak_index,
            "peak_value": result.peak_value,
            "max_absolute_correlation": result.peak_magnitude(),
            "peak_lag_seconds": result.peak_lag_seconds,
            "lag_axis_start_seconds": result.lag_seconds_at(0),
            "lag_axis_end_seconds": result.lag_seconds_at(result.values.len() - 1),
        });
        std::fs::write(&report_path, serde_json::to_string_pretty(&report)?)?;
        println!("Wrote report to {}", report_path.display());
    }

    Ok(())
}
