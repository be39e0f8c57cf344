//! Shared CLI helpers used across multiple commands.

use desfase_core::SampleBuffer;
use desfase_io::Format;
use std::path::{Path, PathBuf};

/// Output directory for every artifact the commands produce.
///
/// Created on demand; the commands assume it exists after this returns.
pub fn results_dir() -> anyhow::Result<PathBuf> {
    let dir = PathBuf::from("./results");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Derive the output base name from an input path.
///
/// Strips the directory and takes the substring before the first `.` of
/// the file name. A base name containing extra periods (`test.audio.wav`)
/// is truncated at the first one; known limitation, kept for output-name
/// compatibility.
pub fn output_stem<P: AsRef<Path>>(path: P) -> String {
    let name = path
        .as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.split('.').next().unwrap_or_default().to_string()
}

/// Print the metadata block for one decoded recording.
pub fn print_metadata(which: &str, buffer: &SampleBuffer, format: Format) {
    let banner = "*".repeat(70);
    println!("{banner}");
    println!("* Which data: {which}");
    println!("{banner}");
    println!(
        "Format: {}",
        match format {
            Format::Wav => "WAV",
            Format::Table => "numeric table",
        }
    );
    println!("Sample rate: {}", buffer.sample_rate());
    println!("Number of channels: {}", buffer.channel_count());
    println!("Number of samples: {}", buffer.frame_count());
    println!("Duration: {:.3}s", buffer.duration_secs());
    println!("{banner}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_strips_directory_and_extension() {
        assert_eq!(output_stem("./audio/test_original.wav"), "test_original");
        assert_eq!(output_stem("plain.csv"), "plain");
    }

    #[test]
    fn stem_truncates_at_first_period() {
        // Documented limitation: extra periods shorten the derived name.
        assert_eq!(output_stem("test.audio.wav"), "test");
    }

    #[test]
    fn stem_of_extensionless_name() {
        assert_eq!(output_stem("noext"), "noext");
    }
}
