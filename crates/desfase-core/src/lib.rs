//! Desfase Core - the in-memory audio model shared by all diagnostics tools
//!
//! This crate provides [`SampleBuffer`], the uniform representation of one
//! decoded recording: interleaved `f32` samples plus sample rate and channel
//! count. Every downstream operation (cross-correlation, resampling,
//! container translation) consumes and produces this type.
//!
//! # Example
//!
//! ```rust
//! use desfase_core::SampleBuffer;
//!
//! let buffer = SampleBuffer::new(vec![0.0, 0.1, 0.2, 0.3], 44100, 2).unwrap();
//! assert_eq!(buffer.frame_count(), 2);
//! assert_eq!(buffer.channel_count(), 2);
//! ```

mod buffer;

pub use buffer::{BufferError, SampleBuffer};
