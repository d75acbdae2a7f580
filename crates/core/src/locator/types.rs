//! Types for the engine locator.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the engine binary comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineSource {
    /// Installed on the host and found via `PATH`.
    #[default]
    System,
    /// Shipped alongside the tool at a configured path.
    Bundled,
}

/// A resolved engine executable, handed to the converter at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineHandle {
    pub path: PathBuf,
    pub source: EngineSource,
}
