//! Container translation between WAV and the numeric table.

use super::common::{output_stem, print_metadata, results_dir};
use clap::Args;
use desfase_io::{Format, decode, encode};
use std::path::PathBuf;

#[derive(Args)]
pub struct TranslateArgs {
    /// Input file in either supported container format
    #[arg(value_name = "INPUT")]
    input: PathBuf,
}

pub fn run(args: TranslateArgs) -> anyhow::Result<()> {
    let source_format = Format::from_path(&args.input)?;
    let target_format = source_format.counterpart();

    tracing::info!(input = %args.input.display(), ?target_format, "translating");
    let buffer = decode(&args.input)?;
    print_metadata("input", &buffer, source_format);

    let dir = results_dir()?;
    let output_path = dir.join(format!(
        "{}.{}",
        output_stem(&args.input),
        target_format.extension()
    ));
    encode(&buffer, &output_path, target_format)?;

    print_metadata("output", &buffer, target_format);
    println!("Wrote translated file to {}", output_path.display());

    Ok(())
}
