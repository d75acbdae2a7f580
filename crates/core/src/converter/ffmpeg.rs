//! FFmpeg-based converter implementation.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use super::error::ConverterError;
use super::traits::Converter;
use super::types::EngineInvocation;
use crate::locator::EngineHandle;

/// Runs conversions by spawning the located ffmpeg executable.
#[derive(Debug, Clone)]
pub struct FfmpegConverter {
    engine: EngineHandle,
}

impl FfmpegConverter {
    /// Creates a converter driving the given engine.
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl Converter for FfmpegConverter {
    fn name(&self) -> &str {
        "ffmpeg"
    }

    async fn convert(&self, invocation: &EngineInvocation) -> Result<(), ConverterError> {
        let args = invocation.to_args();
        debug!(engine = %self.engine.path.display(), ?args, "spawning engine");

        // No timeout: a hung engine hangs its task, callers supervise externally.
        let output = Command::new(&self.engine.path)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    let name = self.engine.path.display().to_string();
                    let reason = format!("{} could not be executed", name);
                    ConverterError::engine_unavailable(name, reason)
                } else {
                    ConverterError::Io(e)
                }
            })?;

        if output.status.success() {
            return Ok(());
        }

        let reason = match output.status.code() {
            Some(code) => format!(
                "ffmpeg exited with code {}. Conversion failed for {}",
                code,
                invocation.input.display()
            ),
            None => format!(
                "ffmpeg was terminated by a signal. Conversion failed for {}",
                invocation.input.display()
            ),
        };

        Err(ConverterError::conversion_failed(
            reason,
            Some(String::from_utf8_lossy(&output.stderr).into_owned()),
        ))
    }
}
