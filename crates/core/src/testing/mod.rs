//! Testing utilities and mock implementations.
//!
//! This module provides a mock engine and a recording progress sink,
//! allowing orchestrator tests without an ffmpeg installation.
//!
//! # Example
//!
//! ```rust,ignore
//! use audioconv_core::testing::{MockConverter, RecordingSink};
//!
//! let converter = MockConverter::new();
//! converter.fail_file("broken.mp3", "Invalid data found when processing input").await;
//!
//! let sink = Arc::new(RecordingSink::new());
//! let runner = BatchConverter::new(config, converter.clone(), sink.clone());
//! let summary = runner.run().await?;
//!
//! assert_eq!(summary.failed, 1);
//! assert_eq!(converter.invocation_count().await, summary.found);
//! ```

mod mock_converter;
mod recording_sink;

pub use mock_converter::{MockConverter, RecordedInvocation};
pub use recording_sink::{RecordedLine, RecordingSink};
