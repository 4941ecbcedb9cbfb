use crate::lock_conversion::domain::{ConversionMetadata, PackageRecord};
use crate::ports::outbound::ManifestEmitter;
use crate::shared::Result;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Serialize)]
struct OsvLockfile {
    #[serde(rename = "lockfileVersion")]
    lockfile_version: u32,
    source: String,
    generated: bool,
    metadata: OsvMetadata,
    packages: BTreeMap<String, OsvPackage>,
}

#[derive(Debug, Serialize)]
struct OsvMetadata {
    generator: String,
    generator_version: String,
    total_packages: usize,
    environments: Vec<String>,
    platforms: Vec<String>,
}

#[derive(Debug, Serialize)]
struct OsvPackage {
    name: String,
    version: String,
    resolved: String,
    ecosystem: String,
    environment: String,
    platform: String,
}

/// OsvLockfileEmitter for the custom OSV manifest (osv-lockfile.json)
///
/// Packages are keyed by `name@version`; when the same pair appears for
/// several platforms or environments the last walked entry wins, which is
/// exactly the keyed-map deduplication the format implies.
pub struct OsvLockfileEmitter;

impl OsvLockfileEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OsvLockfileEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestEmitter for OsvLockfileEmitter {
    fn file_name(&self) -> &'static str {
        "osv-lockfile.json"
    }

    fn emit(&self, records: &[PackageRecord], metadata: &ConversionMetadata) -> Result<String> {
        let environments: BTreeSet<String> =
            records.iter().map(|r| r.environment().to_string()).collect();
        let platforms: BTreeSet<String> =
            records.iter().map(|r| r.platform().to_string()).collect();

        let mut packages = BTreeMap::new();
        for record in records {
            packages.insert(
                record.key(),
                OsvPackage {
                    name: record.name().to_string(),
                    version: record.version().to_string(),
                    resolved: record.url().to_string(),
                    ecosystem: record.ecosystem().to_string(),
                    environment: record.environment().to_string(),
                    platform: record.platform().to_string(),
                },
            );
        }

        let lockfile = OsvLockfile {
            lockfile_version: 1,
            source: metadata.source_file().to_string(),
            generated: true,
            metadata: OsvMetadata {
                generator: metadata.tool_name().to_string(),
                generator_version: metadata.tool_version().to_string(),
                total_packages: records.len(),
                environments: environments.into_iter().collect(),
                platforms: platforms.into_iter().collect(),
            },
            packages,
        };

        serde_json::to_string_pretty(&lockfile).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lock_conversion::domain::PackageCategory;

    fn metadata() -> ConversionMetadata {
        ConversionMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "pixi-osv".to_string(),
            "0.3.0".to_string(),
            "pixi.lock".to_string(),
            "test-project".to_string(),
        )
    }

    fn record(name: &str, version: &str, environment: &str, platform: &str) -> PackageRecord {
        PackageRecord::new(
            name.to_string(),
            version.to_string(),
            environment.to_string(),
            platform.to_string(),
            format!("https://host/{}/{}-{}-0.conda", platform, name, version),
            PackageCategory::Conda,
        )
    }

    #[test]
    fn test_emit_structure() {
        let records = vec![record("openssl", "3.0.7", "default", "linux-64")];

        let output = OsvLockfileEmitter::new().emit(&records, &metadata()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["lockfileVersion"], 1);
        assert_eq!(value["source"], "pixi.lock");
        assert_eq!(value["generated"], true);
        assert_eq!(value["metadata"]["generator"], "pixi-osv");
        assert_eq!(value["metadata"]["generator_version"], "0.3.0");
        assert_eq!(value["metadata"]["total_packages"], 1);
        assert_eq!(value["metadata"]["environments"][0], "default");
        assert_eq!(value["metadata"]["platforms"][0], "linux-64");
    }

    #[test]
    fn test_emit_packages_keyed_by_name_at_version() {
        let records = vec![record("openssl", "3.0.7", "default", "linux-64")];

        let output = OsvLockfileEmitter::new().emit(&records, &metadata()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let package = &value["packages"]["openssl@3.0.7"];
        assert_eq!(package["name"], "openssl");
        assert_eq!(package["version"], "3.0.7");
        assert_eq!(package["ecosystem"], "conda");
        assert_eq!(package["environment"], "default");
        assert_eq!(package["platform"], "linux-64");
        assert!(package["resolved"].as_str().unwrap().contains("openssl-3.0.7"));
    }

    #[test]
    fn test_emit_same_key_last_entry_wins() {
        let records = vec![
            record("openssl", "3.0.7", "default", "linux-64"),
            record("openssl", "3.0.7", "default", "osx-arm64"),
        ];

        let output = OsvLockfileEmitter::new().emit(&records, &metadata()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        // total counts every record; the keyed map collapses to one entry.
        assert_eq!(value["metadata"]["total_packages"], 2);
        assert_eq!(value["packages"].as_object().unwrap().len(), 1);
        assert_eq!(value["packages"]["openssl@3.0.7"]["platform"], "osx-arm64");
    }

    #[test]
    fn test_emit_distinct_environments_and_platforms_sorted() {
        let records = vec![
            record("a", "1.0", "test", "win-64"),
            record("b", "2.0", "default", "linux-64"),
        ];

        let output = OsvLockfileEmitter::new().emit(&records, &metadata()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["metadata"]["environments"][0], "default");
        assert_eq!(value["metadata"]["environments"][1], "test");
        assert_eq!(value["metadata"]["platforms"][0], "linux-64");
        assert_eq!(value["metadata"]["platforms"][1], "win-64");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(OsvLockfileEmitter::new().file_name(), "osv-lockfile.json");
    }
}
