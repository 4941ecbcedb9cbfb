use crate::lock_conversion::domain::{ConversionMetadata, PackageRecord};
use crate::ports::outbound::ManifestEmitter;
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
struct PackageLock {
    name: String,
    #[serde(rename = "lockfileVersion")]
    lockfile_version: u32,
    requires: bool,
    packages: BTreeMap<String, RootPackage>,
    dependencies: BTreeMap<String, LockedDependency>,
}

#[derive(Debug, Serialize)]
struct RootPackage {
    name: String,
    dependencies: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
struct LockedDependency {
    version: String,
    resolved: String,
    ecosystem: String,
}

/// PackageLockEmitter for the npm-style manifest (package-lock.json)
///
/// Some scanners consume npm package locks more reliably than custom
/// formats, so the converted packages are presented as dependencies of a
/// synthetic root package named after the project. Records without a
/// recovered version are omitted - an npm lock entry requires one.
pub struct PackageLockEmitter;

impl PackageLockEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PackageLockEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestEmitter for PackageLockEmitter {
    fn file_name(&self) -> &'static str {
        "package-lock.json"
    }

    fn emit(&self, records: &[PackageRecord], metadata: &ConversionMetadata) -> Result<String> {
        let mut root_dependencies = BTreeMap::new();
        let mut dependencies = BTreeMap::new();

        for record in records.iter().filter(|r| r.has_known_version()) {
            root_dependencies.insert(record.name().to_string(), record.version().to_string());
            dependencies.insert(
                record.name().to_string(),
                LockedDependency {
                    version: record.version().to_string(),
                    resolved: record.url().to_string(),
                    ecosystem: record.ecosystem().to_string(),
                },
            );
        }

        let mut packages = BTreeMap::new();
        packages.insert(
            String::new(),
            RootPackage {
                name: metadata.project_name().to_string(),
                dependencies: root_dependencies,
            },
        );

        let lock = PackageLock {
            name: metadata.project_name().to_string(),
            lockfile_version: 2,
            requires: true,
            packages,
            dependencies,
        };

        serde_json::to_string_pretty(&lock).map_err(Into::into)
    }
}
