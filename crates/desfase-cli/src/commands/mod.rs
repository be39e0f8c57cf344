//! CLI command implementations.

pub mod analyze;
pub mod common;
pub mod downsample;
pub mod generate;
pub mod info;
pub mod translate;
