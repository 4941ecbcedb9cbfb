//! pixi-osv - Convert pixi.lock files into OSV-Scanner compatible formats
//!
//! This library extracts package identities from a pixi.lock file and
//! emits lockfile formats a vulnerability scanner can consume, following
//! hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`lock_conversion`): the pure conversion engine -
//!   locator parsing, document walking, classification, aggregation
//! - **Application Layer** (`application`): use cases, DTOs, factories
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common error types and the Result alias
//!
//! # Example
//!
//! ```no_run
//! use pixi_osv::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let lockfile_reader = FileSystemReader::new();
//! let project_config_reader = FileSystemReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = ConvertLockfileUseCase::new(
//!     lockfile_reader,
//!     project_config_reader,
//!     progress_reporter,
//! );
//!
//! // Execute
//! let request = ConvertRequest::new(PathBuf::from("."));
//! let response = use_case.execute(request)?;
//!
//! // Emit one of the manifests
//! let emitter = EmitterFactory::create(ManifestKind::OsvLockfile);
//! let output = emitter.emit(&response.records, &response.metadata)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod lock_conversion;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::emitters::{
        CondaRequirementsEmitter, ConversionSummaryEmitter, OsvLockfileEmitter,
        PackageLockEmitter, PipRequirementsEmitter,
    };
    pub use crate::adapters::outbound::filesystem::{DirectoryWriter, FileSystemReader};
    pub use crate::application::dto::{ConvertRequest, ConvertResponse, ManifestKind};
    pub use crate::application::factories::EmitterFactory;
    pub use crate::application::use_cases::ConvertLockfileUseCase;
    pub use crate::lock_conversion::domain::{
        ConversionMetadata, LockDocument, PackageCategory, PackageRecord, CONDA_ECOSYSTEM,
        UNKNOWN_VERSION,
    };
    pub use crate::lock_conversion::policies::PythonHeuristic;
    pub use crate::lock_conversion::services::{
        parse_locator, Classifier, LockWalker, MetadataGenerator, RecordAggregator,
    };
    pub use crate::ports::outbound::{
        LockfileReader, ManifestEmitter, OutputPresenter, ProgressReporter, ProjectConfigReader,
    };
    pub use crate::shared::Result;
}
