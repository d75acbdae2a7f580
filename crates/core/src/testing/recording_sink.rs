//! Progress sink that keeps every line for assertions.

use std::sync::Mutex;

use crate::orchestrator::ProgressSink;

/// A line captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedLine {
    Info(String),
    Fail(String),
}

/// Records every reported line in arrival order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<RecordedLine>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines in arrival order.
    pub fn lines(&self) -> Vec<RecordedLine> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Informational lines only.
    pub fn infos(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|line| match line {
                RecordedLine::Info(msg) => Some(msg),
                RecordedLine::Fail(_) => None,
            })
            .collect()
    }

    /// Failure lines only.
    pub fn failures(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|line| match line {
                RecordedLine::Fail(msg) => Some(msg),
                RecordedLine::Info(_) => None,
            })
            .collect()
    }

    fn push(&self, line: RecordedLine) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }
}

impl ProgressSink for RecordingSink {
    fn info(&self, message: &str) {
        self.push(RecordedLine::Info(message.to_string()));
    }

    fn fail(&self, message: &str) {
        self.push(RecordedLine::Fail(message.to_string()));
    }
}
