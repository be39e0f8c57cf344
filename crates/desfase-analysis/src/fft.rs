//! Size-bound FFT wrapper over rustfft.

use rustfft::{FftPlanner, num_complex::Complex};
use std::sync::Arc;

/// Forward/inverse complex FFT pair planned for one size.
///
/// The inverse applies `1/N` normalization, so
/// `inverse(forward(x)) == x` within floating-point tolerance.
pub struct Fft {
    forward: Arc<dyn rustfft::Fft<f32>>,
    inverse: Arc<dyn rustfft::Fft<f32>>,
    size: usize,
}

impl Fft {
    /// Plan a transform pair for the given size.
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        Self {
            forward: planner.plan_fft_forward(size),
            inverse: planner.plan_fft_inverse(size),
            size,
        }
    }

    /// Transform size in samples.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Zero-pad a real signal into a complex buffer of the transform size.
    ///
    /// # Panics
    ///
    /// Panics if `input` is longer than the transform size.
    pub fn pad_real(&self, input: &[f32]) -> Vec<Complex<f32>> {
        assert!(input.len() <= self.size, "input longer than FFT size");
        let mut buffer: Vec<Complex<f32>> =
            input.iter().map(|&x| Complex::new(x, 0.0)).collect();
        buffer.resize(self.size, Complex::new(0.0, 0.0));
        buffer
    }

    /// Forward transform, in place. Unnormalized.
    pub fn forward(&self, buffer: &mut [Complex<f32>]) {
        self.forward.process(buffer);
    }

    /// Inverse transform, in place, normalized by `1/N`.
    pub fn inverse(&self, buffer: &mut [Complex<f32>]) {
        self.inverse.process(buffer);
        let scale = 1.0 / self.size as f32;
        for value in buffer.iter_mut() {
            *value *= scale;
        }
    }
}
