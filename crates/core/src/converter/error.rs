//! Error types for the converter module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while preparing or running conversions.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// The conversion engine could not be found or initialized.
    #[error("{reason}")]
    EngineUnavailable { name: String, reason: String },

    /// Mono and stereo output were both requested.
    #[error("Cannot specify both mono and stereo flags. Please choose one or neither.")]
    ConflictingFlags,

    /// Target format is not one of ogg, m4a, flac.
    #[error("Unsupported format: {format}")]
    UnsupportedFormat { format: String },

    /// Output directory does not exist and could not be created.
    #[error("Failed to create output directory: {path}")]
    OutputDirectoryFailed { path: PathBuf },

    /// The engine ran but exited unsuccessfully.
    #[error("Conversion failed: {reason}")]
    ConversionFailed {
        reason: String,
        stderr: Option<String>,
    },

    /// I/O error while talking to the engine.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConverterError {
    /// Creates an engine unavailable error.
    pub fn engine_unavailable(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::EngineUnavailable {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Creates a conversion failed error, dropping blank stderr output.
    pub fn conversion_failed(reason: impl Into<String>, stderr: Option<String>) -> Self {
        Self::ConversionFailed {
            reason: reason.into(),
            stderr: stderr
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }

    /// Text reported to the user for a failed file.
    ///
    /// The engine's own stderr is preferred over our summary of the failure.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::ConversionFailed {
                stderr: Some(stderr),
                ..
            } => stderr.clone(),
            other => other.to_string(),
        }
    }

}
