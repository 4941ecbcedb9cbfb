use owo_colors::OwoColorize;
use pixi_osv::adapters::outbound::console::StderrProgressReporter;
use pixi_osv::adapters::outbound::filesystem::{DirectoryWriter, FileSystemReader};
use pixi_osv::application::dto::{ConvertRequest, ConvertResponse};
use pixi_osv::application::factories::EmitterFactory;
use pixi_osv::application::use_cases::ConvertLockfileUseCase;
use pixi_osv::cli::Args;
use pixi_osv::lock_conversion::domain::PackageCategory;
use pixi_osv::ports::outbound::{OutputPresenter, ProgressReporter};
use pixi_osv::shared::error::{ConvertError, ExitCode};
use pixi_osv::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

/// Default output directory for the generated lockfiles.
const DEFAULT_OUTPUT_DIR: &str = "osv-lockfiles";

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);
    validate_project_path(&project_path)?;

    let lockfile_reader = FileSystemReader::new();
    let project_config_reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();

    let use_case = ConvertLockfileUseCase::new(
        lockfile_reader,
        project_config_reader,
        progress_reporter,
    );
    let response = use_case.execute(ConvertRequest::new(project_path))?;

    // Emit every selected manifest before writing anything, so a
    // serialization failure never leaves a half-written output directory.
    let mut manifests = Vec::new();
    for kind in args.selected_manifests() {
        let emitter = EmitterFactory::create(kind);
        let content = emitter.emit(&response.records, &response.metadata).map_err(|e| {
            ConvertError::OutputGenerationError {
                format: emitter.file_name().to_string(),
                details: e.to_string(),
            }
        })?;
        manifests.push((emitter.file_name(), content));
    }

    let output_dir = PathBuf::from(args.output_dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR));
    let writer = DirectoryWriter::new(output_dir.clone());
    let reporter = StderrProgressReporter::new();

    reporter.report("\n🛠️  Writing OSV-compatible lockfiles...");
    for (index, (file_name, content)) in manifests.iter().enumerate() {
        writer.present(file_name, content)?;
        reporter.report_progress(index + 1, manifests.len(), Some(file_name));
    }
    reporter.report_completion(&format!(
        "🎯 Conversion complete: {} file(s) written to {}",
        manifests.len(),
        output_dir.display()
    ));

    print_summary(&response, &output_dir);
    Ok(())
}

/// Maps an error to the exit code contract: an empty conversion is
/// distinguishable from real failures in CI.
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<ConvertError>() {
        Some(ConvertError::NoCondaPackages { .. }) => ExitCode::NoPackagesFound,
        _ => ExitCode::ApplicationError,
    }
}

fn print_summary(response: &ConvertResponse, output_dir: &Path) {
    let python_count = response
        .records
        .iter()
        .filter(|r| r.category() == PackageCategory::Python)
        .count();

    eprintln!("   📁 Output directory: {}", output_dir.display().cyan());
    eprintln!(
        "   📊 Total package entries: {}",
        response.records.len().green()
    );
    eprintln!("   🐍 Python-classified: {}", python_count.green());
    eprintln!();
    eprintln!("🔍 To scan with OSV-Scanner:");
    eprintln!("   osv-scanner {}/requirements.txt", output_dir.display());
    eprintln!("   osv-scanner {}/", output_dir.display());
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ConvertError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| ConvertError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(ConvertError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(ConvertError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
