//! Container I/O for the desfase toolkit.
//!
//! Exactly two persisted representations of a
//! [`SampleBuffer`](desfase_core::SampleBuffer) are recognized:
//!
//! - **WAV** - the tagged streaming-audio container, read and written
//!   through `hound`
//! - **Table** - a flat plain-text numeric table, one frame per line,
//!   for interchange with spreadsheet and array tooling
//!
//! [`decode`] and [`encode`] dispatch on [`Format`], which is inferred
//! from the file extension. All failures are terminal; a failure during
//! encode may leave a partially written file behind.

mod codec;
mod table;
mod wav;

pub use codec::{Format, decode, encode};
pub use table::{read_table, write_table};
pub use wav::{WavEncoding, WavInfo, read_wav, read_wav_info, write_wav};

/// Error types for container operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV container read/write failure.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Underlying file I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file extension names neither supported container.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A numeric-table file failed to parse.
    #[error("malformed table in {path} at line {line}: {reason}")]
    MalformedTable {
        /// Path of the offending file.
        path: String,
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        reason: String,
    },

    /// Decoded metadata is inconsistent.
    #[error(transparent)]
    InvalidAudioData(#[from] desfase_core::BufferError),
}

/// Convenience result type for container operations.
pub type Result<T> = std::result::Result<T, Error>;
