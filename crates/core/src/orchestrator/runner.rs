//! Batch conversion runner.
//!
//! Fans out one tokio task per request with no concurrency limit, then
//! waits for all of them. A failing file never stops the others.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::converter::{
    BatchSummary, ConversionOutcome, ConversionRequest, Converter, ConverterError,
    EngineInvocation, OutputLocation,
};
use crate::discovery;

use super::config::OrchestratorConfig;
use super::sink::ProgressSink;

/// Converts every discovered file of a directory concurrently.
pub struct BatchConverter<C>
where
    C: Converter + 'static,
{
    config: OrchestratorConfig,
    converter: Arc<C>,
    sink: Arc<dyn ProgressSink>,
}

impl<C> BatchConverter<C>
where
    C: Converter + 'static,
{
    /// Create a new batch converter.
    pub fn new(config: OrchestratorConfig, converter: C, sink: Arc<dyn ProgressSink>) -> Self {
        Self {
            config,
            converter: Arc::new(converter),
            sink,
        }
    }

    /// Discovers inputs in the working directory and converts them all.
    pub async fn run(&self) -> std::io::Result<BatchSummary> {
        let files =
            discovery::discover(&self.config.working_dir, self.config.discovery_mode).await?;
        debug!(count = files.len(), dir = %self.config.working_dir.display(), "discovered inputs");

        Ok(self.convert_all(self.requests(files)).await)
    }

    /// Builds one request per input file using the configured settings.
    pub fn requests(&self, files: Vec<PathBuf>) -> Vec<ConversionRequest> {
        files
            .into_iter()
            .map(|input_path| ConversionRequest {
                input_path,
                target_format: self.config.target_format,
                quality: self.config.quality,
                channel_mode: self.config.channel_mode,
            })
            .collect()
    }

    /// Converts all requests concurrently and returns once every one has an outcome.
    ///
    /// Outcomes are listed in request order; the per-file report lines arrive
    /// in completion order.
    pub async fn convert_all(&self, requests: Vec<ConversionRequest>) -> BatchSummary {
        let total = requests.len();
        let label = self.config.discovery_mode.label();

        if total == 0 {
            self.sink
                .info(&format!("No {} files found in the current directory.", label));
            return BatchSummary::default();
        }

        self.sink.info(&format!(
            "Found {} {} file(s) to convert to {}.",
            total,
            label,
            self.config.target_format.extension().to_uppercase()
        ));
        self.sink.info(self.config.channel_mode.describe());

        let root = &self.config.working_dir;
        let mut handles = Vec::with_capacity(total);
        for (index, request) in requests.into_iter().enumerate() {
            let location = OutputLocation::resolve(&request, root);
            let labels = Labels {
                input: shown(root, &request.input_path),
                output: shown(root, &location.path()),
            };
            self.sink.info(&format!(
                "Converting ({}/{}): {} -> {}",
                index + 1,
                total,
                labels.input,
                labels.output
            ));

            let converter = Arc::clone(&self.converter);
            let sink = Arc::clone(&self.sink);
            let task_request = request.clone();
            let task_labels = labels.clone();
            let handle = tokio::spawn(async move {
                convert_one(
                    converter.as_ref(),
                    sink.as_ref(),
                    task_request,
                    location,
                    task_labels,
                )
                .await
            });
            handles.push((request, labels, handle));
        }

        let mut outcomes = Vec::with_capacity(total);
        for (request, labels, handle) in handles {
            match handle.await {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    warn!(input = %request.input_path.display(), error = %e, "conversion task died");
                    let message = format!("conversion task aborted: {}", e);
                    self.sink
                        .fail(&format!("Failed to convert {}: {}", labels.input, message));
                    outcomes.push(ConversionOutcome::failed(request, message));
                }
            }
        }

        BatchSummary::from_outcomes(total, outcomes)
    }
}

/// Paths as printed in report lines.
#[derive(Debug, Clone)]
struct Labels {
    input: String,
    output: String,
}

/// Renders `path` for report lines, dropping the leading `./` when the
/// working directory is the current one.
fn shown(root: &Path, path: &Path) -> String {
    if root == Path::new(".") {
        path.strip_prefix(root).unwrap_or(path).display().to_string()
    } else {
        path.display().to_string()
    }
}

/// Runs a single request and reports its result.
async fn convert_one<C>(
    converter: &C,
    sink: &dyn ProgressSink,
    request: ConversionRequest,
    location: OutputLocation,
    labels: Labels,
) -> ConversionOutcome
where
    C: Converter + ?Sized,
{
    let output = location.path();

    // Safe to race: several tasks may create the same subdirectory.
    if let Err(e) = tokio::fs::create_dir_all(&location.directory).await {
        let err = ConverterError::OutputDirectoryFailed {
            path: location.directory.clone(),
        };
        let message = format!("{} ({})", err, e);
        sink.fail(&format!("Failed to convert {}: {}", labels.input, message));
        return ConversionOutcome::failed(request, message);
    }

    let invocation = EngineInvocation::new(&request, &location);
    match converter.convert(&invocation).await {
        Ok(()) => {
            sink.info(&format!(
                "✓ Converted: {} -> {}",
                labels.input, labels.output
            ));
            ConversionOutcome::succeeded(request, &output)
        }
        Err(e) => {
            let message = e.diagnostic();
            sink.fail(&format!("Failed to convert {}: {}", labels.input, message));
            ConversionOutcome::failed(request, message)
        }
    }
}
