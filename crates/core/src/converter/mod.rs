//! Converter module for transcoding audio files.
//!
//! This module maps the uniform 0-10 quality dial and channel mode onto
//! ffmpeg arguments and runs the engine as a subprocess.
//!
//! # Example
//!
//! ```ignore
//! use audioconv_core::converter::{
//!     ChannelMode, ConversionRequest, Converter, EngineInvocation, FfmpegConverter,
//!     OutputLocation, Quality, TargetFormat,
//! };
//!
//! let converter = FfmpegConverter::new(engine);
//!
//! let request = ConversionRequest {
//!     input_path: PathBuf::from("song.mp3"),
//!     target_format: TargetFormat::M4a,
//!     quality: Quality::new(2),
//!     channel_mode: ChannelMode::Preserve,
//! };
//! let location = OutputLocation::resolve(&request, Path::new("."));
//!
//! // ffmpeg -i song.mp3 -b:a 272k ./song.m4a -y
//! converter.convert(&EngineInvocation::new(&request, &location)).await?;
//! ```

mod error;
mod ffmpeg;
mod params;
mod traits;
mod types;

pub use error::ConverterError;
pub use ffmpeg::FfmpegConverter;
pub use params::{m4a_bitrate_kbps, map_channels, map_parameters};
pub use traits::Converter;
pub use types::{
    BatchSummary, ChannelMapping, ChannelMode, ConversionOutcome, ConversionRequest,
    EncoderParameters, EngineInvocation, OutputLocation, Quality, TargetFormat,
};
