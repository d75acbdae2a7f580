//! Engine locator.
//!
//! Resolves the path of the conversion engine before any file is touched.
//! Two sources exist:
//! - **System**: look the engine name up on `PATH`, falling back to running
//!   `<name> -version` when the lookup itself cannot be performed.
//! - **Bundled**: use a configured path to a shipped binary.

mod types;

pub use types::{EngineHandle, EngineSource};

use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::converter::ConverterError;

/// Locates the engine described by `config`.
///
/// Unavailability is returned as [`ConverterError::EngineUnavailable`].
pub async fn locate(config: &EngineConfig) -> Result<EngineHandle, ConverterError> {
    match config.source {
        EngineSource::System => locate_system(&config.name).await,
        EngineSource::Bundled => locate_bundled(&config.name, config.path.as_deref()),
    }
}

/// Searches `PATH` for `name`.
pub async fn locate_system(name: &str) -> Result<EngineHandle, ConverterError> {
    match which::which(name) {
        Ok(path) => {
            debug!(engine = name, path = %path.display(), "engine found on PATH");
            Ok(EngineHandle {
                path,
                source: EngineSource::System,
            })
        }
        Err(which::Error::CannotFindBinaryPath) => Err(ConverterError::engine_unavailable(
            name,
            format!("{} is not available in your system. Please install {} first.", name, name),
        )),
        Err(e) => {
            warn!(engine = name, error = %e, "PATH lookup failed, probing engine directly");
            if probe_version(Path::new(name)).await {
                Ok(EngineHandle {
                    path: PathBuf::from(name),
                    source: EngineSource::System,
                })
            } else {
                Err(ConverterError::engine_unavailable(
                    name,
                    format!("{} could not be executed", name),
                ))
            }
        }
    }
}

/// Uses a configured engine binary. An unset or empty path is unavailable.
pub fn locate_bundled(name: &str, path: Option<&Path>) -> Result<EngineHandle, ConverterError> {
    let path = match path {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => {
            return Err(ConverterError::engine_unavailable(
                name,
                format!(
                    "{} could not be initialized. Please ensure your system supports the required binaries.",
                    name
                ),
            ))
        }
    };

    if !path.is_file() {
        return Err(ConverterError::engine_unavailable(
            name,
            format!(
                "{} could not be initialized: no bundled binary at {}",
                name,
                path.display()
            ),
        ));
    }

    debug!(engine = name, path = %path.display(), "using bundled engine");
    Ok(EngineHandle {
        path: path.to_path_buf(),
        source: EngineSource::Bundled,
    })
}

/// Runs `<engine> -version` and reports whether it exited successfully.
async fn probe_version(engine: &Path) -> bool {
    Command::new(engine)
        .arg("-version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|status| status.success())
        .unwrap_or(false)
}
