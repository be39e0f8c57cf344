//! Test fixture generation.
//!
//! The analysis workflow needs known inputs: a clean tone, reproducible
//! white noise, and a delayed copy of an existing recording to verify the
//! lag estimate against a ground truth.

use clap::{Args, Subcommand};
use desfase_core::SampleBuffer;
use desfase_io::{Format, decode, encode};
use std::f32::consts::PI;
use std::path::PathBuf;

#[derive(Args)]
pub struct GenerateArgs {
    #[command(subcommand)]
    command: GenerateCommand,
}

#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate a sine tone
    Tone {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Frequency in Hz
        #[arg(long, default_value = "440.0")]
        freq: f32,

        /// Duration in seconds
        #[arg(long, default_value = "1.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "44100")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.8")]
        amplitude: f32,
    },

    /// Generate reproducible white noise
    Noise {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Duration in seconds
        #[arg(long, default_value = "1.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "44100")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.5")]
        amplitude: f32,

        /// PRNG seed
        #[arg(long, default_value = "1")]
        seed: u32,
    },

    /// Write a delayed copy of an existing recording
    Delayed {
        /// Input audio file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Delay in whole frames (leading silence)
        #[arg(long, default_value = "4410")]
        frames: usize,
    },
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    match args.command {
        GenerateCommand::Tone {
            output,
            freq,
            duration,
            sample_rate,
            amplitude,
        } => {
            let n = (duration * sample_rate as f32) as usize;
            let samples: Vec<f32> = (0..n)
                .map(|i| {
                    amplitude * (2.0 * PI * freq * i as f32 / sample_rate as f32).sin()
                })
                .collect();
            let buffer = SampleBuffer::new(samples, sample_rate, 1)?;
            encode(&buffer, &output, Format::Wav)?;
            println!("Wrote {freq} Hz tone to {}", output.display());
        }

        GenerateCommand::Noise {
            output,
            duration,
            sample_rate,
            amplitude,
            seed,
        } => {
            let n = (duration * sample_rate as f32) as usize;
            let samples = white_noise(n, seed, amplitude);
            let buffer = SampleBuffer::new(samples, sample_rate, 1)?;
            encode(&buffer, &output, Format::Wav)?;
            println!("Wrote white noise to {}", output.display());
        }

        GenerateCommand::Delayed {
            input,
            output,
            frames,
        } => {
            let source = decode(&input)?;
            let channels = source.channel_count() as usize;
            let lead = frames * channels;

            // Prepend silence, keep the original length
            let mut samples = vec![0.0f32; lead];
            samples.extend_from_slice(source.samples());
            samples.truncate(source.samples().len());

            let buffer =
                SampleBuffer::new(samples, source.sample_rate(), source.channel_count())?;
            encode(&buffer, &output, Format::Wav)?;
            println!(
                "Wrote copy of {} delayed by {frames} frames to {}",
                input.display(),
                output.display()
            );
        }
    }
    Ok(())
}

/// Linear congruential white noise, identical across runs for a seed.
fn white_noise(n: usize, seed: u32, amplitude: f32) -> Vec<f32> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            amplitude * (state as i32 as f32) / (i32::MAX as f32)
        })
        .collect()
}
