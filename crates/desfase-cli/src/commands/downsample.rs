//! Sample-rate reduction of one recording.

use super::common::{output_stem, print_metadata, results_dir};
use crate::plot;
use clap::Args;
use desfase_analysis::resample;
use desfase_io::{Format, decode, encode};
use std::path::PathBuf;

#[derive(Args)]
pub struct DownsampleArgs {
    /// Input audio file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Target sample rate in Hz (must not exceed the source rate)
    #[arg(value_name = "RATE")]
    rate: u32,
}

pub fn run(args: DownsampleArgs) -> anyhow::Result<()> {
    let format = Format::from_path(&args.input)?;

    tracing::info!(input = %args.input.display(), rate = args.rate, "decoding input");
    let input = decode(&args.input)?;
    print_metadata("input", &input, format);

    let output = resample(&input, args.rate)?;
    tracing::info!(
        source_frames = input.frame_count(),
        target_frames = output.frame_count(),
        "resampled"
    );
    print_metadata("output", &output, Format::Wav);

    let dir = results_dir()?;
    let base = format!("{}_downsampled_to_{}", output_stem(&args.input), args.rate);

    let wav_path = dir.join(format!("{base}.wav"));
    encode(&output, &wav_path, Format::Wav)?;
    println!("Wrote downsampled audio to {}", wav_path.display());

    let input_plot = dir.join(format!("{base}_input.pgm"));
    plot::render(&input_plot, &[vec![input.samples()]])?;
    let output_plot = dir.join(format!("{base}_output.pgm"));
    plot::render(&output_plot, &[vec![output.samples()]])?;
    println!(
        "Wrote signal graphs to {} and {}",
        input_plot.display(),
        output_plot.display()
    );

    Ok(())
}
