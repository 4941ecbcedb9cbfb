/// Domain models for lockfile conversion
pub mod conversion_metadata;
pub mod lock_document;
pub mod package_record;

pub use conversion_metadata::{ConversionMetadata, DEFAULT_PROJECT_NAME};
pub use lock_document::{LockDocument, LockEnvironment, PackageEntry};
pub use package_record::{PackageCategory, PackageRecord, CONDA_ECOSYSTEM, UNKNOWN_VERSION};
