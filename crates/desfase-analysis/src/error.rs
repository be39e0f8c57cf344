//! Error types for the numeric operations.

use std::fmt;

/// Errors raised by [`correlate`](crate::correlate) and
/// [`resample`](crate::resample).
///
/// All of these are terminal for the operation that raised them; there is
/// no retry or partial-result path.
///
/// `Display` and `Error` are implemented by hand rather than derived:
/// `thiserror` treats any field named `source` as an error source, which
/// does not fit `UnsupportedRateDirection`'s `source` rate field.
#[derive(Debug)]
pub enum AnalysisError {
    /// A zero-length buffer was supplied to a numeric operation.
    EmptyInput(&'static str),

    /// Correlation inputs decode to different sample rates.
    ///
    /// The lag-to-seconds conversion only makes sense over a shared rate,
    /// so mismatched inputs are rejected rather than silently converted
    /// with one of the two rates.
    SampleRateMismatch {
        /// Rate of the first buffer.
        first: u32,
        /// Rate of the second buffer.
        second: u32,
    },

    /// A resample request asked for a rate above the source rate.
    /// This toolkit only reduces sample rates.
    UnsupportedRateDirection {
        /// The requested target rate.
        requested: u32,
        /// The source buffer's rate.
        source: u32,
    },

    /// A resample request specified a zero target rate.
    InvalidRate,

    /// The Fourier-domain transform could not produce a usable output.
    Resample(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput(what) => write!(f, "empty input: {what}"),
            Self::SampleRateMismatch { first, second } => {
                write!(f, "sample rate mismatch: {first} Hz vs {second} Hz")
            }
            Self::UnsupportedRateDirection { requested, source } => write!(
                f,
                "target rate {requested} Hz is higher than source rate {source} Hz \
                 (only rate reduction is supported)"
            ),
            Self::InvalidRate => f.write_str("target sample rate must be positive"),
            Self::Resample(msg) => write!(f, "resample failed: {msg}"),
        }
    }
}

impl std::error::Error for AnalysisError {}
