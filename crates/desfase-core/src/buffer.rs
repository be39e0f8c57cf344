//! Uniform in-memory representation of decoded audio.

use thiserror::Error;

/// Error raised when decoded audio metadata is inconsistent.
#[derive(Debug, Error)]
pub enum BufferError {
    /// Sample rate, channel count, or sample-count arithmetic is invalid.
    #[error("invalid audio data: {0}")]
    InvalidAudioData(String),
}

/// One channel-interleaved sequence of floating-point audio samples.
///
/// Samples are stored frame-major: for a stereo buffer the layout is
/// `[L0, R0, L1, R1, …]`. The buffer is immutable once constructed; the
/// resampler and codecs build new buffers rather than mutating in place.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
    channel_count: u16,
}

impl SampleBuffer {
    /// Construct a validated buffer.
    ///
    /// Fails with [`BufferError::InvalidAudioData`] when the sample rate is
    /// zero, the channel count is zero, or the sample count is not a whole
    /// number of frames. An empty sample vector is allowed; the numeric
    /// operations reject empty input themselves.
    pub fn new(
        samples: Vec<f32>,
        sample_rate: u32,
        channel_count: u16,
    ) -> Result<Self, BufferError> {
        if sample_rate == 0 {
            return Err(BufferError::InvalidAudioData(
                "sample rate must be positive".into(),
            ));
        }
        if channel_count == 0 {
            return Err(BufferError::InvalidAudioData(
                "channel count must be at least 1".into(),
            ));
        }
        if samples.len() % channel_count as usize != 0 {
            return Err(BufferError::InvalidAudioData(format!(
                "{} samples is not a whole number of {}-channel frames",
                samples.len(),
                channel_count
            )));
        }
        Ok(Self {
            samples,
            sample_rate,
            channel_count,
        })
    }

    /// The raw interleaved sample sequence.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample rate in frames per second.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of channels (1 = mono, 2 = stereo).
    pub fn channel_count(&self) -> u16 {
        self.channel_count
    }

    /// Number of frames (samples per channel).
    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channel_count as usize
    }

    /// True when the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.frame_count() as f64 / f64::from(self.sample_rate)
    }

    /// Split the interleaved samples into per-channel vectors.
    pub fn deinterleave(&self) -> Vec<Vec<f32>> {
        let channels = self.channel_count as usize;
        let mut out = vec![Vec::with_capacity(self.frame_count()); channels];
        for frame in self.samples.chunks_exact(channels) {
            for (ch, &value) in frame.iter().enumerate() {
                out[ch].push(value);
            }
        }
        out
    }

    /// Rebuild an interleaved buffer from equal-length channel vectors.
    ///
    /// The inverse of [`deinterleave`](Self::deinterleave). Fails when the
    /// channel vectors disagree in length or no channels are given.
    pub fn from_channels(
        channels: &[Vec<f32>],
        sample_rate: u32,
    ) -> Result<Self, BufferError> {
        let Some(first) = channels.first() else {
            return Err(BufferError::InvalidAudioData(
                "at least one channel is required".into(),
            ));
        };
        let frames = first.len();
        if channels.iter().any(|c| c.len() != frames) {
            return Err(BufferError::InvalidAudioData(
                "channels differ in length".into(),
            ));
        }
        let mut samples = Vec::with_capacity(frames * channels.len());
        for frame in 0..frames {
            for channel in channels {
                samples.push(channel[frame]);
            }
        }
        Self::new(samples, sample_rate, channels.len() as u16)
    }
}
