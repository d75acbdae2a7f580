//! Output sinks for orchestrator progress reports.

use tracing::{error, info};

/// Receives the per-file and batch-level lines emitted during a run.
pub trait ProgressSink: Send + Sync {
    /// An informational line.
    fn info(&self, message: &str);

    /// A failure line.
    fn fail(&self, message: &str);
}

/// Forwards reports to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn fail(&self, message: &str) {
        error!("{}", message);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl ProgressSink for SilentSink {
    fn info(&self, _message: &str) {}

    fn fail(&self, _message: &str) {}
}
