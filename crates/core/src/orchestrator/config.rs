//! Orchestrator configuration.

use std::path::PathBuf;

use crate::converter::{ChannelMode, Quality, TargetFormat};
use crate::discovery::DiscoveryMode;

/// Configuration for a batch conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestratorConfig {
    /// Directory scanned for inputs. Outputs are written here, or into its
    /// `m`/`s` subdirectory when a channel mode is forced.
    pub working_dir: PathBuf,

    /// Which input extensions are picked up.
    pub discovery_mode: DiscoveryMode,

    pub target_format: TargetFormat,

    pub quality: Quality,

    pub channel_mode: ChannelMode,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            working_dir: PathBuf::from("."),
            discovery_mode: DiscoveryMode::default(),
            target_format: TargetFormat::default(),
            quality: Quality::default(),
            channel_mode: ChannelMode::default(),
        }
    }
}

impl OrchestratorConfig {
    /// Creates a config scanning `working_dir` with default settings.
    pub fn for_dir(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            ..Default::default()
        }
    }

    /// Sets the discovery mode.
    pub fn with_discovery_mode(mut self, mode: DiscoveryMode) -> Self {
        self.discovery_mode = mode;
        self
    }

    /// Sets the target format.
    pub fn with_format(mut self, format: TargetFormat) -> Self {
        self.target_format = format;
        self
    }

    /// Sets the quality dial.
    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    /// Sets the channel mode.
    pub fn with_channel_mode(mut self, mode: ChannelMode) -> Self {
        self.channel_mode = mode;
        self
    }
}
