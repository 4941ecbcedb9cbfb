use crate::application::dto::{ConvertRequest, ConvertResponse};
use crate::lock_conversion::domain::{LockDocument, PackageCategory, DEFAULT_PROJECT_NAME};
use crate::lock_conversion::services::{
    Classifier, LockWalker, MetadataGenerator, RecordAggregator,
};
use crate::ports::outbound::{LockfileReader, ProgressReporter, ProjectConfigReader};
use crate::shared::error::ConvertError;
use crate::shared::Result;

/// ConvertLockfileUseCase - Core use case for lockfile conversion
///
/// Orchestrates the conversion pipeline (read -> parse -> walk ->
/// aggregate) using generic dependency injection for all infrastructure
/// dependencies. The pipeline is synchronous and stateless; a failed run
/// produces no partial results.
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `PCR` - ProjectConfigReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ConvertLockfileUseCase<LR, PCR, PR> {
    lockfile_reader: LR,
    project_config_reader: PCR,
    progress_reporter: PR,
}

impl<LR, PCR, PR> ConvertLockfileUseCase<LR, PCR, PR>
where
    LR: LockfileReader,
    PCR: ProjectConfigReader,
    PR: ProgressReporter,
{
    /// Creates a new ConvertLockfileUseCase with injected dependencies
    pub fn new(lockfile_reader: LR, project_config_reader: PCR, progress_reporter: PR) -> Self {
        Self {
            lockfile_reader,
            project_config_reader,
            progress_reporter,
        }
    }

    /// Executes the conversion use case
    ///
    /// # Arguments
    /// * `request` - Conversion request containing the project path
    ///
    /// # Returns
    /// ConvertResponse containing the aggregated records and run metadata
    ///
    /// # Errors
    /// - `LockfileNotFound` / `FileReadError` when pixi.lock is unreadable
    /// - `LockfileParseError` when the content is not valid YAML
    /// - `MalformedLockfile` when the document lacks `environments`
    /// - `NoCondaPackages` when nothing convertible was found
    pub fn execute(&self, request: ConvertRequest) -> Result<ConvertResponse> {
        self.progress_reporter.report(&format!(
            "🔍 Loading pixi.lock from: {}",
            request.project_path.display()
        ));

        let content = self.lockfile_reader.read_lockfile(&request.project_path)?;
        let document = self.parse_document(&request, &content)?;

        let records = {
            let entries = LockWalker::walk(&document)?;
            RecordAggregator::aggregate(entries, &Classifier::default())
        };

        if records.is_empty() {
            return Err(ConvertError::NoCondaPackages {
                path: request.project_path.join("pixi.lock"),
            }
            .into());
        }

        let python_count = records
            .iter()
            .filter(|r| r.category() == PackageCategory::Python)
            .count();
        self.progress_reporter.report(&format!(
            "📦 Found {} conda package entr{} ({} Python-classified)",
            records.len(),
            if records.len() == 1 { "y" } else { "ies" },
            python_count
        ));

        let project_name = self.resolve_project_name(&request);
        let metadata = MetadataGenerator::generate("pixi.lock", &project_name);

        Ok(ConvertResponse::new(records, metadata))
    }

    fn parse_document(&self, request: &ConvertRequest, content: &str) -> Result<LockDocument> {
        LockDocument::parse(content).map_err(|e| {
            ConvertError::LockfileParseError {
                path: request.project_path.join("pixi.lock"),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// A missing or unreadable pixi.toml is not fatal; the npm-style
    /// manifest falls back to its synthetic root package name.
    fn resolve_project_name(&self, request: &ConvertRequest) -> String {
        match self
            .project_config_reader
            .read_project_name(&request.project_path)
        {
            Ok(name) => name,
            Err(e) => {
                self.progress_reporter.report(&format!(
                    "   - No project name available ({}), using \"{}\"",
                    e, DEFAULT_PROJECT_NAME
                ));
                DEFAULT_PROJECT_NAME.to_string()
            }
        }
    }
}
