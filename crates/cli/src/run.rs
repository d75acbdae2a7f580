//! The conversion run shared by both binaries.

use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use audioconv_core::{
    load_config, locate, validate_config, BatchConverter, ChannelMode, Config, DiscoveryMode,
    FfmpegConverter, OrchestratorConfig, Quality, TracingSink,
};

use crate::args::{ChannelArgs, Cli, ConversionArgs, Mp3ToCli};

/// Exit status of a strict run in which at least one file failed.
///
/// Distinct from clap's usage-error status of 2.
pub const EXIT_PARTIAL_FAILURE: i32 = 3;

/// Everything a binary hands to [`run`].
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub discovery_mode: DiscoveryMode,
    pub conversion: ConversionArgs,
    /// `None` for entry points without channel flags; output keeps the source layout.
    pub channels: Option<ChannelArgs>,
    /// Directory scanned for inputs and used as the output root.
    pub working_dir: PathBuf,
}

impl From<Cli> for RunOptions {
    fn from(cli: Cli) -> Self {
        Self {
            discovery_mode: DiscoveryMode::AllSupported,
            conversion: cli.conversion,
            channels: Some(cli.channels),
            working_dir: PathBuf::from("."),
        }
    }
}

impl From<Mp3ToCli> for RunOptions {
    fn from(cli: Mp3ToCli) -> Self {
        Self {
            discovery_mode: DiscoveryMode::Mp3Only,
            conversion: cli.conversion,
            channels: None,
            working_dir: PathBuf::from("."),
        }
    }
}

impl RunOptions {
    /// Builds the orchestrator settings, letting explicit flags win over `config`.
    ///
    /// Conflicting channel flags are rejected here, before any file I/O.
    pub fn resolve(&self, config: &Config) -> Result<OrchestratorConfig> {
        let conversion = &config.conversion;

        let channel_mode = match self.channels {
            Some(flags) => ChannelMode::from_flags(
                flags.mono || conversion.mono,
                flags.stereo || conversion.stereo,
            )?,
            None => ChannelMode::Preserve,
        };

        Ok(OrchestratorConfig::for_dir(&self.working_dir)
            .with_discovery_mode(self.discovery_mode)
            .with_format(self.conversion.format.unwrap_or(conversion.format))
            .with_quality(Quality::new(
                self.conversion.quality.unwrap_or(conversion.quality),
            ))
            .with_channel_mode(channel_mode))
    }

    fn strict(&self, config: &Config) -> bool {
        self.conversion.strict || config.conversion.strict
    }
}

/// Installs the global tracing subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .compact()
        .init();
}

/// Runs one batch and returns the process exit status.
///
/// Fatal pre-flight problems (bad configuration, conflicting flags, missing
/// engine) are returned as errors before any file is touched.
pub async fn run(options: RunOptions) -> Result<i32> {
    let config = load_config(options.conversion.config.as_deref())
        .context("Failed to load configuration")?;
    validate_config(&config).context("Configuration validation failed")?;

    let settings = options.resolve(&config)?;

    info!(
        "Searching for {} files in the current directory...",
        settings.discovery_mode.label()
    );
    info!(
        "Output format: {}",
        settings.target_format.extension().to_uppercase()
    );
    info!(
        "Quality setting: {} (0=highest, 10=lowest)",
        settings.quality
    );

    let engine = locate(&config.engine).await?;
    info!("Using {} at {}", config.engine.name, engine.path.display());

    let converter = FfmpegConverter::new(engine);
    let batch = BatchConverter::new(settings, converter, Arc::new(TracingSink));
    let summary = batch
        .run()
        .await
        .with_context(|| format!("Failed to list {}", options.working_dir.display()))?;

    info!("Conversion completed!");
    info!("{} succeeded, {} failed", summary.succeeded, summary.failed);

    if summary.has_failures() && options.strict(&config) {
        return Ok(EXIT_PARTIAL_FAILURE);
    }
    Ok(0)
}
