//! Format inference and decode/encode dispatch.

use crate::{Error, Result, table, wav};
use desfase_core::SampleBuffer;
use std::path::Path;

/// The two supported container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Tagged streaming-audio container (`.wav`, `.wave`).
    Wav,
    /// Flat numeric table (`.csv`).
    Table,
}

impl Format {
    /// Infer the container format from a file extension.
    ///
    /// Anything other than the recognized audio and structured-data
    /// extensions is an [`Error::UnsupportedFormat`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("wav" | "wave") => Ok(Format::Wav),
            Some("csv") => Ok(Format::Table),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// The other supported format; translation targets this.
    pub fn counterpart(self) -> Self {
        match self {
            Format::Wav => Format::Table,
            Format::Table => Format::Wav,
        }
    }

    /// Canonical file extension for the format.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Wav => "wav",
            Format::Table => "csv",
        }
    }
}

/// Decode a container file into a [`SampleBuffer`], inferring the format
/// from the file extension.
pub fn decode<P: AsRef<Path>>(path: P) -> Result<SampleBuffer> {
    match Format::from_path(&path)? {
        Format::Wav => wav::read_wav(path),
        Format::Table => table::read_table(path),
    }
}

/// Encode a [`SampleBuffer`] into the named container format.
pub fn encode<P: AsRef<Path>>(
    buffer: &SampleBuffer,
    path: P,
    format: Format,
) -> Result<()> {
    match format {
        Format::Wav => wav::write_wav(path, buffer),
        Format::Table => table::write_table(path, buffer),
    }
}
