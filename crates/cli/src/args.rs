//! Command-line argument definitions using clap

use clap::{Args, Parser};
use std::path::PathBuf;

use audioconv_core::{ConverterError, TargetFormat};

/// Convert every audio file in the current directory to OGG, AAC/M4A, or FLAC
#[derive(Parser, Debug)]
#[command(name = "audioconv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub conversion: ConversionArgs,

    #[command(flatten)]
    pub channels: ChannelArgs,
}

/// Convert every MP3 file in the current directory to OGG, AAC/M4A, or FLAC
#[derive(Parser, Debug)]
#[command(name = "mp3to")]
#[command(author, version, about, long_about = None)]
pub struct Mp3ToCli {
    #[command(flatten)]
    pub conversion: ConversionArgs,
}

/// Flags shared by both entry points.
///
/// Unset values fall back to the configuration file and environment.
#[derive(Args, Debug, Clone, Default)]
pub struct ConversionArgs {
    /// Output format (ogg, m4a, flac). Default: ogg
    #[arg(short, long, value_parser = parse_format)]
    pub format: Option<TargetFormat>,

    /// Quality setting (0-10, where 0 is highest quality and 10 is lowest). Default: 5
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub quality: Option<u8>,

    /// Configuration file (TOML)
    #[arg(long, env = "AUDIOCONV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Exit with status 2 when any file fails to convert
    #[arg(long)]
    pub strict: bool,
}

/// Channel overrides. Mono and stereo are mutually exclusive.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct ChannelArgs {
    /// Force mono output, written to the `m` subdirectory
    #[arg(short, long)]
    pub mono: bool,

    /// Force stereo output, written to the `s` subdirectory
    #[arg(short, long)]
    pub stereo: bool,
}

fn parse_format(s: &str) -> Result<TargetFormat, String> {
    s.parse().map_err(|e: ConverterError| e.to_string())
}
