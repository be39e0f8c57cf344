//! Display container metadata.

use clap::Args;
use desfase_io::{Format, WavEncoding, decode, read_wav_info};
use std::path::PathBuf;

/// Display container file information.
#[derive(Args)]
pub struct InfoArgs {
    /// Path to the container file
    pub file: PathBuf,
}

pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    println!("File:        {}", args.file.display());

    match Format::from_path(&args.file)? {
        Format::Wav => {
            // Header-only read, no sample data loaded
            let info = read_wav_info(&args.file)?;
            let encoding = match info.encoding {
                WavEncoding::Pcm => "PCM",
                WavEncoding::IeeeFloat => "IEEE Float",
            };
            println!("Format:      WAV {} {}-bit", encoding, info.bits_per_sample);
            println!("Channels:    {}", info.channels);
            println!("Sample Rate: {} Hz", info.sample_rate);
            println!(
                "Duration:    {:.3}s ({} frames)",
                info.duration_secs, info.frame_count
            );
        }
        Format::Table => {
            // The table has no header-only path; decode fully
            let buffer = decode(&args.file)?;
            println!("Format:      numeric table");
            println!("Channels:    {}", buffer.channel_count());
            println!("Sample Rate: {} Hz", buffer.sample_rate());
            println!(
                "Duration:    {:.3}s ({} frames)",
                buffer.duration_secs(),
                buffer.frame_count()
            );
        }
    }

    let file_size = std::fs::metadata(&args.file)?.len();
    println!("File Size:   {}", format_bytes(file_size));

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_format_scales() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }
}
