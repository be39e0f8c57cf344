//! Flat numeric-table container.
//!
//! A plain-text table holding one decoded recording:
//!
//! ```text
//! sample_rate,44100
//! channels,2
//! 0.0,0.0
//! 0.0024999376,-0.0024999376
//! …
//! ```
//!
//! Two header lines, then one line per frame with comma-separated channel
//! values. Floats are written with Rust's shortest-roundtrip formatting,
//! so a read of a written table reproduces the samples bit-exactly.

use crate::{Error, Result};
use desfase_core::SampleBuffer;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Read a numeric-table file into a [`SampleBuffer`].
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<SampleBuffer> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);

    let mut sample_rate: Option<u32> = None;
    let mut channels: Option<u16> = None;
    let mut samples: Vec<f32> = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let malformed = |reason: String| Error::MalformedTable {
            path: path.display().to_string(),
            line: index + 1,
            reason,
        };

        if let Some(value) = line.strip_prefix("sample_rate,") {
            sample_rate = Some(
                value
                    .trim()
                    .parse()
                    .map_err(|_| malformed(format!("bad sample rate '{value}'")))?,
            );
            continue;
        }
        if let Some(value) = line.strip_prefix("channels,") {
            channels = Some(
                value
                    .trim()
                    .parse()
                    .map_err(|_| malformed(format!("bad channel count '{value}'")))?,
            );
            continue;
        }

        let expected = channels
            .ok_or_else(|| malformed("frame data before header".into()))?
            as usize;
        let mut count = 0;
        for field in line.split(',') {
            let value: f32 = field
                .trim()
                .parse()
                .map_err(|_| malformed(format!("bad sample value '{field}'")))?;
            samples.push(value);
            count += 1;
        }
        if count != expected {
            return Err(malformed(format!(
                "expected {expected} channel values, found {count}"
            )));
        }
    }

    let sample_rate = sample_rate.ok_or_else(|| Error::MalformedTable {
        path: path.display().to_string(),
        line: 0,
        reason: "missing sample_rate header".into(),
    })?;
    let channels = channels.ok_or_else(|| Error::MalformedTable {
        path: path.display().to_string(),
        line: 0,
        reason: "missing channels header".into(),
    })?;

    tracing::debug!(
        sample_rate,
        channels,
        samples = samples.len(),
        "decoded numeric table"
    );

    Ok(SampleBuffer::new(samples, sample_rate, channels)?)
}

/// Write a [`SampleBuffer`] to a numeric-table file.
pub fn write_table<P: AsRef<Path>>(path: P, buffer: &SampleBuffer) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    writeln!(writer, "sample_rate,{}", buffer.sample_rate())?;
    writeln!(writer, "channels,{}", buffer.channel_count())?;

    for frame in buffer
        .samples()
        .chunks_exact(buffer.channel_count() as usize)
    {
        for (i, value) in frame.iter().enumerate() {
            if i > 0 {
                write!(writer, ",")?;
            }
            write!(writer, "{value}")?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}
