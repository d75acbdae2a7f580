//! Types for the converter module.

use serde::{Deserialize, Serialize};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::error::ConverterError;

/// Output format the engine is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TargetFormat {
    /// Ogg Vorbis
    #[default]
    Ogg,
    /// AAC in an MPEG-4 container
    M4a,
    /// Free Lossless Audio Codec
    Flac,
}

impl TargetFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Ogg => "ogg",
            Self::M4a => "m4a",
            Self::Flac => "flac",
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for TargetFormat {
    type Err = ConverterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ogg" => Ok(Self::Ogg),
            "m4a" => Ok(Self::M4a),
            "flac" => Ok(Self::Flac),
            _ => Err(ConverterError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for TargetFormat {
    type Error = ConverterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TargetFormat> for String {
    fn from(format: TargetFormat) -> Self {
        format.extension().to_string()
    }
}

/// The uniform quality dial: 0 is highest fidelity, 10 is lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quality(u8);

impl Quality {
    /// Highest accepted dial value.
    pub const MAX: u8 = 10;

    /// Creates a quality value, clamping anything above [`Quality::MAX`].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    /// Returns the dial value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(5)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the output channel layout relates to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelMode {
    /// Keep whatever the input has.
    #[default]
    Preserve,
    /// Downmix to one channel.
    ForceMono,
    /// Force two channels.
    ForceStereo,
}

impl ChannelMode {
    /// Builds a channel mode from the two mutually exclusive flags.
    pub fn from_flags(mono: bool, stereo: bool) -> Result<Self, ConverterError> {
        match (mono, stereo) {
            (true, true) => Err(ConverterError::ConflictingFlags),
            (true, false) => Ok(Self::ForceMono),
            (false, true) => Ok(Self::ForceStereo),
            (false, false) => Ok(Self::Preserve),
        }
    }

    /// Human readable description used in run logs.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Preserve => "Output will preserve original channel configuration.",
            Self::ForceMono => "Output will be forced to mono.",
            Self::ForceStereo => "Output will be forced to stereo.",
        }
    }
}

/// A single file to convert. One per discovered input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversionRequest {
    pub input_path: PathBuf,
    pub target_format: TargetFormat,
    pub quality: Quality,
    pub channel_mode: ChannelMode,
}

/// Encoder flags derived from a target format and quality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderParameters {
    /// Engine flag, e.g. `-q:a`.
    pub flag: String,
    /// Value passed after the flag.
    pub value: String,
    /// Additional arguments appended after the flag/value pair.
    pub extra_args: Vec<String>,
}

/// Channel override arguments and the output subdirectory they imply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMapping {
    pub args: Vec<String>,
    pub subdirectory: &'static str,
}

/// Where a converted file ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLocation {
    pub directory: PathBuf,
    /// Kept as an `OsString` so non UTF-8 input names survive unchanged.
    pub filename: OsString,
}

impl OutputLocation {
    /// Resolves the output location of `request` below `output_root`.
    ///
    /// The filename is the input's stem with the target extension; the
    /// directory is `output_root` itself unless the channel mode selects a
    /// subdirectory.
    pub fn resolve(request: &ConversionRequest, output_root: &Path) -> Self {
        let subdirectory = super::params::map_channels(request.channel_mode).subdirectory;
        let directory = if subdirectory == "." {
            output_root.to_path_buf()
        } else {
            output_root.join(subdirectory)
        };

        let mut filename = request
            .input_path
            .file_stem()
            .map(OsStr::to_os_string)
            .unwrap_or_default();
        filename.push(".");
        filename.push(request.target_format.extension());

        Self {
            directory,
            filename,
        }
    }

    /// Full path of the output file.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

/// A fully resolved engine call for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineInvocation {
    pub input: PathBuf,
    pub output: PathBuf,
    pub channel_args: Vec<String>,
    pub parameters: EncoderParameters,
}

impl EngineInvocation {
    /// Builds the invocation converting `request` into `location`.
    pub fn new(request: &ConversionRequest, location: &OutputLocation) -> Self {
        Self {
            input: request.input_path.clone(),
            output: location.path(),
            channel_args: super::params::map_channels(request.channel_mode).args,
            parameters: super::params::map_parameters(request.target_format, request.quality),
        }
    }

    /// Renders `-i <input> [-ac N] <flag> <value> <output> -y`.
    ///
    /// Paths are passed through as-is, without any UTF-8 conversion.
    pub fn to_args(&self) -> Vec<OsString> {
        let mut args = vec![OsString::from("-i"), self.input.clone().into_os_string()];

        args.extend(self.channel_args.iter().map(OsString::from));
        args.push(OsString::from(&self.parameters.flag));
        args.push(OsString::from(&self.parameters.value));
        args.extend(self.parameters.extra_args.iter().map(OsString::from));

        args.push(self.output.clone().into_os_string());
        // Always overwrite so reruns never prompt.
        args.push(OsString::from("-y"));

        args
    }
}

/// Result of one conversion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    pub request: ConversionRequest,
    pub success: bool,
    /// Output path on success, diagnostic text on failure.
    pub message: String,
}

impl ConversionOutcome {
    pub fn succeeded(request: ConversionRequest, output: &Path) -> Self {
        Self {
            request,
            success: true,
            message: output.display().to_string(),
        }
    }

    pub fn failed(request: ConversionRequest, message: impl Into<String>) -> Self {
        Self {
            request,
            success: false,
            message: message.into(),
        }
    }
}

/// Aggregate result of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Number of requests handed to the orchestrator.
    pub found: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Outcomes in request order.
    pub outcomes: Vec<ConversionOutcome>,
}

impl BatchSummary {
    /// Builds a summary from collected outcomes.
    pub fn from_outcomes(found: usize, outcomes: Vec<ConversionOutcome>) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.success).count();
        Self {
            found,
            succeeded,
            failed: outcomes.len() - succeeded,
            outcomes,
        }
    }

    /// Whether any file failed to convert.
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(input: &str, format: TargetFormat, mode: ChannelMode) -> ConversionRequest {
        ConversionRequest {
            input_path: PathBuf::from(input),
            target_format: format,
            quality: Quality::default(),
            channel_mode: mode,
        }
    }

    #[test]
    fn test_target_format_parse() {
        assert_eq!("ogg".parse::<TargetFormat>().unwrap(), TargetFormat::Ogg);
        assert_eq!("M4A".parse::<TargetFormat>().unwrap(), TargetFormat::M4a);
        assert_eq!(" flac ".parse::<TargetFormat>().unwrap(), TargetFormat::Flac);

        let err = "wav".parse::<TargetFormat>().unwrap_err();
        assert!(matches!(err, ConverterError::UnsupportedFormat { ref format } if format == "wav"));
    }

    #[test]
    fn test_target_format_deserialize_rejects_unknown() {
        #[derive(Debug, Deserialize)]
        struct Wrapper {
            format: TargetFormat,
        }

        let ok: Wrapper = toml::from_str(r#"format = "flac""#).unwrap();
        assert_eq!(ok.format, TargetFormat::Flac);

        let err = toml::from_str::<Wrapper>(r#"format = "mp3""#).unwrap_err();
        assert!(err.to_string().contains("Unsupported format: mp3"));
    }

    #[test]
    fn test_quality_clamps() {
        assert_eq!(Quality::new(0).value(), 0);
        assert_eq!(Quality::new(10).value(), 10);
        assert_eq!(Quality::new(42).value(), 10);
        assert_eq!(Quality::default().value(), 5);
    }

    #[test]
    fn test_channel_mode_from_flags() {
        assert_eq!(ChannelMode::from_flags(false, false).unwrap(), ChannelMode::Preserve);
        assert_eq!(ChannelMode::from_flags(true, false).unwrap(), ChannelMode::ForceMono);
        assert_eq!(ChannelMode::from_flags(false, true).unwrap(), ChannelMode::ForceStereo);
        assert!(matches!(
            ChannelMode::from_flags(true, true),
            Err(ConverterError::ConflictingFlags)
        ));
    }

    #[test]
    fn test_output_location_preserve() {
        let req = request("song.mp3", TargetFormat::Ogg, ChannelMode::Preserve);
        let location = OutputLocation::resolve(&req, Path::new("."));
        assert_eq!(location.directory, PathBuf::from("."));
        assert_eq!(location.filename, "song.ogg");
        assert_eq!(location.path(), PathBuf::from("./song.ogg"));
    }

    #[test]
    fn test_output_location_channel_subdirectories() {
        let mono = request("/music/Track.MP3", TargetFormat::M4a, ChannelMode::ForceMono);
        let location = OutputLocation::resolve(&mono, Path::new("/out"));
        assert_eq!(location.path(), PathBuf::from("/out/m/Track.m4a"));

        let stereo = request("a.flac", TargetFormat::Flac, ChannelMode::ForceStereo);
        let location = OutputLocation::resolve(&stereo, Path::new("."));
        assert_eq!(location.directory, PathBuf::from("./s"));
        assert_eq!(location.filename, "a.flac");
    }

    #[test]
    fn test_output_location_keeps_inner_dots() {
        let req = request("live.at.home.ogg", TargetFormat::Flac, ChannelMode::Preserve);
        let location = OutputLocation::resolve(&req, Path::new("."));
        assert_eq!(location.filename, "live.at.home.flac");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_names_pass_through() {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let input = PathBuf::from(OsStr::from_bytes(b"caf\xe9.mp3"));
        let mut req = request("unused", TargetFormat::Flac, ChannelMode::ForceStereo);
        req.input_path = input.clone();

        let location = OutputLocation::resolve(&req, Path::new("/out"));
        assert_eq!(location.filename.clone().into_vec(), b"caf\xe9.flac".to_vec());

        let args = EngineInvocation::new(&req, &location).to_args();
        assert_eq!(args[1], input.into_os_string());
        assert_eq!(
            args[args.len() - 2].as_bytes(),
            b"/out/s/caf\xe9.flac".as_slice()
        );
    }

    #[test]
    fn test_invocation_args_preserve() {
        let mut req = request("song.mp3", TargetFormat::Ogg, ChannelMode::Preserve);
        req.quality = Quality::new(0);
        let location = OutputLocation::resolve(&req, Path::new(""));
        let args = EngineInvocation::new(&req, &location).to_args();
        assert_eq!(args, vec!["-i", "song.mp3", "-q:a", "0", "song.ogg", "-y"]);
    }

    #[test]
    fn test_invocation_args_mono() {
        let mut req = request("song.mp3", TargetFormat::M4a, ChannelMode::ForceMono);
        req.quality = Quality::new(10);
        let location = OutputLocation::resolve(&req, Path::new("."));
        let args = EngineInvocation::new(&req, &location).to_args();
        assert_eq!(
            args,
            vec!["-i", "song.mp3", "-ac", "1", "-b:a", "80k", "./m/song.m4a", "-y"]
        );
    }

    #[test]
    fn test_batch_summary_counts() {
        let ok = ConversionOutcome::succeeded(
            request("a.mp3", TargetFormat::Ogg, ChannelMode::Preserve),
            Path::new("a.ogg"),
        );
        let bad = ConversionOutcome::failed(
            request("b.mp3", TargetFormat::Ogg, ChannelMode::Preserve),
            "boom",
        );

        let summary = BatchSummary::from_outcomes(2, vec![ok, bad]);
        assert_eq!(summary.found, 2);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 1);
        assert!(summary.has_failures());
        assert!(!BatchSummary::default().has_failures());
    }
}
