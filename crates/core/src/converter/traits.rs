//! Trait definitions for the converter module.

use async_trait::async_trait;

use super::error::ConverterError;
use super::types::EngineInvocation;

/// Something that can carry out an engine invocation.
///
/// Implementations must be safe to call concurrently; the orchestrator runs
/// every request of a batch at the same time.
#[async_trait]
pub trait Converter: Send + Sync {
    /// Returns the name of this converter implementation.
    fn name(&self) -> &str;

    /// Runs one conversion to completion.
    ///
    /// Returns `Ok(())` only when the engine exited successfully.
    async fn convert(&self, invocation: &EngineInvocation) -> Result<(), ConverterError>;
}
