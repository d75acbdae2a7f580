pub mod config;
pub mod converter;
pub mod discovery;
pub mod locator;
pub mod orchestrator;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, ConversionConfig,
    EngineConfig,
};
pub use converter::{
    BatchSummary, ChannelMode, ConversionOutcome, ConversionRequest, Converter, ConverterError,
    FfmpegConverter, Quality, TargetFormat,
};
pub use discovery::{discover, DiscoveryMode};
pub use locator::{locate, EngineHandle, EngineSource};
pub use orchestrator::{BatchConverter, OrchestratorConfig, ProgressSink, SilentSink, TracingSink};
