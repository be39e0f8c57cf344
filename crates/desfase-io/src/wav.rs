//! WAV container reading and writing.

use crate::Result;
use desfase_core::SampleBuffer;
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// WAV sample encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavEncoding {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

/// WAV header metadata, read without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of frames (samples per channel).
    pub frame_count: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Sample encoding.
    pub encoding: WavEncoding,
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let total_samples = u64::from(reader.len());
    let frame_count = total_samples / u64::from(spec.channels);

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        frame_count,
        duration_secs: frame_count as f64 / f64::from(spec.sample_rate),
        encoding: match spec.sample_format {
            SampleFormat::Float => WavEncoding::IeeeFloat,
            SampleFormat::Int => WavEncoding::Pcm,
        },
    })
}

/// Read a WAV file into a [`SampleBuffer`].
///
/// Integer PCM samples are scaled to `[-1, 1)` by `1 / 2^(bits-1)`. All
/// channels are kept interleaved; there is no mixdown, since translation
/// must preserve the channel layout exactly.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<SampleBuffer> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    tracing::debug!(
        sample_rate = spec.sample_rate,
        channels = spec.channels,
        samples = samples.len(),
        "decoded WAV"
    );

    Ok(SampleBuffer::new(samples, spec.sample_rate, spec.channels)?)
}

/// Write a [`SampleBuffer`] to a WAV file as 32-bit IEEE float.
///
/// Float output keeps decode(encode(b)) within floating-point tolerance
/// of `b` regardless of the source encoding. The writer is finalized
/// before returning, so the header is consistent on success.
pub fn write_wav<P: AsRef<Path>>(path: P, buffer: &SampleBuffer) -> Result<()> {
    let spec = hound::WavSpec {
        channels: buffer.channel_count(),
        sample_rate: buffer.sample_rate(),
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in buffer.samples() {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn roundtrip_mono_f32() {
        let samples: Vec<f32> = (0..1000).map(|i| (i as f32 / 1000.0).sin()).collect();
        let buffer = SampleBuffer::new(samples.clone(), 48000, 1).unwrap();

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &buffer).unwrap();

        let loaded = read_wav(file.path()).unwrap();
        assert_eq!(loaded.sample_rate(), 48000);
        assert_eq!(loaded.channel_count(), 1);
        assert_eq!(loaded.frame_count(), 1000);
        for (a, b) in samples.iter().zip(loaded.samples().iter()) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn roundtrip_stereo_preserves_interleaving() {
        let samples = vec![0.1, -0.1, 0.2, -0.2, 0.3, -0.3];
        let buffer = SampleBuffer::new(samples.clone(), 44100, 2).unwrap();

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &buffer).unwrap();

        let loaded = read_wav(file.path()).unwrap();
        assert_eq!(loaded.channel_count(), 2);
        assert_eq!(loaded.frame_count(), 3);
        for (a, b) in samples.iter().zip(loaded.samples().iter()) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn reads_pcm16_with_scaling() {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let file = NamedTempFile::new().unwrap();
        let mut writer = WavWriter::create(file.path(), spec).unwrap();
        writer.write_sample(16384i16).unwrap(); // 0.5 full scale
        writer.write_sample(-16384i16).unwrap();
        writer.finalize().unwrap();

        let loaded = read_wav(file.path()).unwrap();
        assert!((loaded.samples()[0] - 0.5).abs() < 1e-4);
        assert!((loaded.samples()[1] + 0.5).abs() < 1e-4);
    }

    #[test]
    fn info_reports_header_metadata() {
        let buffer = SampleBuffer::new(vec![0.0; 2000], 8000, 2).unwrap();
        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &buffer).unwrap();

        let info = read_wav_info(file.path()).unwrap();
        assert_eq!(info.channels, 2);
        assert_eq!(info.sample_rate, 8000);
        assert_eq!(info.frame_count, 1000);
        assert_eq!(info.encoding, WavEncoding::IeeeFloat);
        assert!((info.duration_secs - 0.125).abs() < 1e-9);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_wav("/definitely/not/here.wav").is_err());
    }
}
