//! Fourier-domain sample-rate reduction.
//!
//! Resamples by transforming each channel to the frequency domain,
//! truncating the spectrum to the target length, and inverse-transforming.
//! This preserves spectral shape better than naive decimation, under the
//! standing assumption that the source carries no significant energy above
//! the new Nyquist; no separate anti-aliasing guard is applied.
//!
//! Only rate reduction is supported. The target frame count is
//!
//! ```text
//! round_ties_even(frame_count * target_rate / source_rate)
//! ```
//!
//! matching the rounding of the numeric runtime the expected outputs were
//! produced with.

use crate::error::AnalysisError;
use crate::fft::Fft;
use desfase_core::SampleBuffer;
use rustfft::num_complex::Complex;

/// Resample a buffer down to `target_rate`.
///
/// The output buffer carries `target_rate`, the same channel count, and
/// the rounded target frame count. Requesting the source rate itself is a
/// valid passthrough. All channels are processed independently.
///
/// # Errors
///
/// - [`AnalysisError::InvalidRate`] for a zero target rate
/// - [`AnalysisError::UnsupportedRateDirection`] when `target_rate`
///   exceeds the source rate
/// - [`AnalysisError::EmptyInput`] for a zero-length buffer
/// - [`AnalysisError::Resample`] when the target frame count rounds to
///   zero and no transform can be taken
pub fn resample(
    buffer: &SampleBuffer,
    target_rate: u32,
) -> Result<SampleBuffer, AnalysisError> {
    if target_rate == 0 {
        return Err(AnalysisError::InvalidRate);
    }
    if target_rate > buffer.sample_rate() {
        return Err(AnalysisError::UnsupportedRateDirection {
            requested: target_rate,
            source: buffer.sample_rate(),
        });
    }
    if buffer.is_empty() {
        return Err(AnalysisError::EmptyInput("resample input"));
    }

    let source_len = buffer.frame_count();
    let target_len = target_frame_count(source_len, buffer.sample_rate(), target_rate);
    if target_len == 0 {
        return Err(AnalysisError::Resample(format!(
            "{source_len} frames at {} Hz round to zero frames at {target_rate} Hz",
            buffer.sample_rate()
        )));
    }

    let forward = Fft::new(source_len);
    let inverse = Fft::new(target_len);

    let resampled: Vec<Vec<f32>> = buffer
        .deinterleave()
        .iter()
        .map(|channel| resample_channel(channel, target_len, &forward, &inverse))
        .collect();

    SampleBuffer::from_channels(&resampled, target_rate)
        .map_err(|e| AnalysisError::Resample(e.to_string()))
}

/// `round_ties_even(frames * target / source)`.
fn target_frame_count(frames: usize, source_rate: u32, target_rate: u32) -> usize {
    let exact = frames as f64 * f64::from(target_rate) / f64::from(source_rate);
    exact.round_ties_even() as usize
}

/// Truncate one channel's spectrum from `source_len` to `target_len` bins
/// and inverse-transform.
///
/// The target spectrum keeps the lowest frequencies from both ends of the
/// source spectrum. When the target length is even, the two source bins
/// that straddle the new Nyquist fold into the single target Nyquist bin,
/// keeping the spectrum conjugate-symmetric and the output real.
fn resample_channel(
    channel: &[f32],
    target_len: usize,
    forward: &Fft,
    inverse: &Fft,
) -> Vec<f32> {
    let source_len = channel.len();
    debug_assert!(target_len <= source_len);

    let mut spectrum = forward.pad_real(channel);
    forward.forward(&mut spectrum);

    let mut truncated = vec![Complex::new(0.0f32, 0.0); target_len];
    truncated[0] = spectrum[0];
    for k in 1..(target_len + 1) / 2 {
        truncated[k] = spectrum[k];
        truncated[target_len - k] = spectrum[source_len - k];
    }
    if target_len % 2 == 0 {
        let nyquist = target_len / 2;
        truncated[nyquist] = if target_len < source_len {
            spectrum[nyquist] + spectrum[source_len - nyquist]
        } else {
            spectrum[nyquist]
        };
    }

    inverse.inverse(&mut truncated);

    // The inverse normalizes by the target length; amplitude preservation
    // needs target/source instead.
    let scale = target_len as f32 / source_len as f32;
    truncated.iter().map(|c| c.re * scale).collect()
}
