use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::converter::TargetFormat;
use crate::locator::EngineSource;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub conversion: ConversionConfig,
}

/// Engine configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Where to look for the engine
    #[serde(default)]
    pub source: EngineSource,
    /// Executable name looked up on PATH
    #[serde(default = "default_engine_name")]
    pub name: String,
    /// Bundled binary location (required when source = "bundled")
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            source: EngineSource::default(),
            name: default_engine_name(),
            path: None,
        }
    }
}

fn default_engine_name() -> String {
    "ffmpeg".to_string()
}

/// Conversion defaults, overridable from the command line
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConversionConfig {
    #[serde(default)]
    pub format: TargetFormat,
    /// Quality dial, 0 (best) to 10 (smallest)
    #[serde(default = "default_quality")]
    pub quality: u8,
    #[serde(default)]
    pub mono: bool,
    #[serde(default)]
    pub stereo: bool,
    /// Exit non-zero when any file fails to convert
    #[serde(default)]
    pub strict: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            format: TargetFormat::default(),
            quality: default_quality(),
            mono: false,
            stereo: false,
            strict: false,
        }
    }
}

fn default_quality() -> u8 {
    5
}
