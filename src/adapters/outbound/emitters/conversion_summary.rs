use crate::lock_conversion::domain::{ConversionMetadata, PackageCategory, PackageRecord};
use crate::ports::outbound::ManifestEmitter;
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeSet;

/// Number of records included in the summary's sample block.
const SAMPLE_SIZE: usize = 10;

/// The manifests a full conversion run produces alongside this summary.
const MANIFEST_FILES: &[&str] = &[
    "requirements.txt",
    "conda-requirements.txt",
    "osv-lockfile.json",
    "package-lock.json",
];

#[derive(Debug, Serialize)]
struct ConversionSummary {
    conversion_summary: SummaryBody,
    osv_files_created: Vec<String>,
    packages: Vec<SampleRecord>,
}

#[derive(Debug, Serialize)]
struct SummaryBody {
    source_file: String,
    project_name: String,
    generated_at: String,
    generator: String,
    generator_version: String,
    total_packages_found: usize,
    python_packages: usize,
    conda_packages: usize,
    environments: Vec<String>,
    platforms: Vec<String>,
}

#[derive(Debug, Serialize)]
struct SampleRecord {
    name: String,
    version: String,
    environment: String,
    platform: String,
    url: String,
    ecosystem: String,
    category: String,
}

/// ConversionSummaryEmitter for the conversion report
/// (conversion-summary.json)
///
/// Counts mirror what the requirements emitters write: distinct pins, not
/// raw record counts. The sample block is the stable first-N prefix of the
/// aggregated record list.
pub struct ConversionSummaryEmitter;

impl ConversionSummaryEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConversionSummaryEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestEmitter for ConversionSummaryEmitter {
    fn file_name(&self) -> &'static str {
        "conversion-summary.json"
    }

    fn emit(&self, records: &[PackageRecord], metadata: &ConversionMetadata) -> Result<String> {
        let python_pins: BTreeSet<String> = records
            .iter()
            .filter(|r| r.category() == PackageCategory::Python)
            .map(|r| r.requirement())
            .collect();
        let all_pins: BTreeSet<String> = records.iter().map(|r| r.requirement()).collect();

        let environments: BTreeSet<String> =
            records.iter().map(|r| r.environment().to_string()).collect();
        let platforms: BTreeSet<String> =
            records.iter().map(|r| r.platform().to_string()).collect();

        let sample = records
            .iter()
            .take(SAMPLE_SIZE)
            .map(|record| SampleRecord {
                name: record.name().to_string(),
                version: record.version().to_string(),
                environment: record.environment().to_string(),
                platform: record.platform().to_string(),
                url: record.url().to_string(),
                ecosystem: record.ecosystem().to_string(),
                category: record.category().as_str().to_string(),
            })
            .collect();

        let summary = ConversionSummary {
            conversion_summary: SummaryBody {
                source_file: metadata.source_file().to_string(),
                project_name: metadata.project_name().to_string(),
                generated_at: metadata.generated_at().to_string(),
                generator: metadata.tool_name().to_string(),
                generator_version: metadata.tool_version().to_string(),
                total_packages_found: records.len(),
                python_packages: python_pins.len(),
                conda_packages: all_pins.len(),
                environments: environments.into_iter().collect(),
                platforms: platforms.into_iter().collect(),
            },
            osv_files_created: MANIFEST_FILES.iter().map(|f| f.to_string()).collect(),
            packages: sample,
        };

        serde_json::to_string_pretty(&summary).map_err(Into::into)
    }
}
