//! Mock converter for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::converter::{Converter, ConverterError, EngineInvocation};

/// A recorded engine invocation for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedInvocation {
    /// The invocation that was submitted.
    pub invocation: EngineInvocation,
    /// Whether the simulated engine succeeded.
    pub success: bool,
}

/// Mock implementation of the Converter trait.
///
/// Provides controllable behavior for testing:
/// - Track invocations for assertions
/// - Fail specific input files with a given stderr text
/// - Simulate conversion time and observe how many run at once
/// - Optionally write empty output files
///
/// Clones share state, so a clone handed to the orchestrator can be
/// inspected through the original.
#[derive(Debug, Clone)]
pub struct MockConverter {
    /// Recorded invocations, in the order they started.
    invocations: Arc<RwLock<Vec<RecordedInvocation>>>,
    /// Input file names that fail, with the stderr text to report.
    failing_files: Arc<RwLock<HashMap<String, String>>>,
    /// Simulated conversion duration in milliseconds.
    conversion_duration_ms: Arc<RwLock<u64>>,
    /// Whether to create the output file on success.
    write_outputs: Arc<RwLock<bool>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl Default for MockConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConverter {
    /// Create a new mock converter.
    pub fn new() -> Self {
        Self {
            invocations: Arc::new(RwLock::new(Vec::new())),
            failing_files: Arc::new(RwLock::new(HashMap::new())),
            conversion_duration_ms: Arc::new(RwLock::new(0)),
            write_outputs: Arc::new(RwLock::new(false)),
            in_flight: Arc::new(AtomicUsize::new(0)),
            max_in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get all recorded invocations.
    pub async fn recorded_invocations(&self) -> Vec<RecordedInvocation> {
        self.invocations.read().await.clone()
    }

    /// Get the number of invocations performed.
    pub async fn invocation_count(&self) -> usize {
        self.invocations.read().await.len()
    }

    /// Clear recorded invocations.
    pub async fn clear_recorded(&self) {
        self.invocations.write().await.clear();
    }

    /// Make conversions of the input named `file_name` fail with `stderr`.
    pub async fn fail_file(&self, file_name: impl Into<String>, stderr: impl Into<String>) {
        self.failing_files
            .write()
            .await
            .insert(file_name.into(), stderr.into());
    }

    /// Set the simulated conversion duration.
    pub async fn set_conversion_duration(&self, duration: Duration) {
        *self.conversion_duration_ms.write().await = duration.as_millis() as u64;
    }

    /// Create empty output files for successful conversions.
    pub async fn set_write_outputs(&self, write: bool) {
        *self.write_outputs.write().await = write;
    }

    /// Highest number of conversions observed running at the same time.
    pub fn max_concurrent(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn failure_for(&self, invocation: &EngineInvocation) -> Option<String> {
        let name = invocation.input.file_name()?.to_string_lossy().into_owned();
        self.failing_files.read().await.get(&name).cloned()
    }
}

#[async_trait]
impl Converter for MockConverter {
    fn name(&self) -> &str {
        "mock"
    }

    async fn convert(&self, invocation: &EngineInvocation) -> Result<(), ConverterError> {
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        let failure = self.failure_for(invocation).await;
        self.invocations.write().await.push(RecordedInvocation {
            invocation: invocation.clone(),
            success: failure.is_none(),
        });

        let duration_ms = *self.conversion_duration_ms.read().await;
        if duration_ms > 0 {
            tokio::time::sleep(Duration::from_millis(duration_ms)).await;
        }

        let write_outputs = *self.write_outputs.read().await;
        let result = match failure {
            Some(stderr) => Err(ConverterError::conversion_failed(
                format!(
                    "mock exited with code 1. Conversion failed for {}",
                    invocation.input.display()
                ),
                Some(stderr),
            )),
            None if write_outputs => {
                tokio::fs::write(&invocation.output, b"").await.map_err(ConverterError::Io)
            }
            None => Ok(()),
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}
