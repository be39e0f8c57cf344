//! Desfase Analysis - the numeric heart of the toolkit
//!
//! Two operations, both frequency-domain:
//!
//! - [`correlate`] - full linear cross-correlation of two recordings with
//!   peak-lag extraction, for estimating the time offset between
//!   synchronized microphones
//! - [`resample`] - band-limited sample-rate reduction via spectrum
//!   truncation
//!
//! Both are pure functions over [`SampleBuffer`](desfase_core::SampleBuffer)
//! references and are safe to call from multiple threads.
//!
//! # Example
//!
//! ```rust
//! use desfase_core::SampleBuffer;
//! use desfase_analysis::correlate;
//!
//! let tone: Vec<f32> = (0..256)
//!     .map(|i| (0.1 * i as f32).sin())
//!     .collect();
//! let a = SampleBuffer::new(tone.clone(), 8000, 1).unwrap();
//! let b = SampleBuffer::new(tone, 8000, 1).unwrap();
//!
//! let result = correlate(&a, &b).unwrap();
//! assert_eq!(result.peak_lag_seconds, 0.0);
//! ```

pub mod fft;
mod error;
pub mod resample;
pub mod xcorr;

pub use error::AnalysisError;
pub use fft::Fft;
pub use resample::resample;
pub use xcorr::{Correlation, correlate};
