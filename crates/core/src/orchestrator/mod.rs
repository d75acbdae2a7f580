//! Batch conversion orchestrator.
//!
//! Turns discovered files into conversion requests and runs them all at once:
//! - **Fan-out**: one task per request, no concurrency limit
//! - **Fan-in**: waits for every outcome, failures included
//! - **Reporting**: progress goes through an injected [`ProgressSink`]

mod config;
mod runner;
mod sink;

pub use config::OrchestratorConfig;
pub use runner::BatchConverter;
pub use sink::{ProgressSink, SilentSink, TracingSink};
