use serde::Deserialize;
use std::collections::BTreeMap;

use crate::shared::Result;

/// Serde model of a pixi.lock document.
///
/// Only the fields the converter consumes are modeled. pixi records much
/// more per environment (channels, hashes, indexes); serde ignores unknown
/// fields, so lockfiles from any recent pixi version deserialize cleanly.
///
/// Environments and platforms deserialize into `BTreeMap` so iteration is
/// sorted and a given document always walks in the same order.
#[derive(Debug, Deserialize)]
pub struct LockDocument {
    #[serde(default)]
    pub version: Option<u64>,
    #[serde(default)]
    pub environments: Option<BTreeMap<String, LockEnvironment>>,
}

/// One resolved environment (dependency group) in the lockfile.
#[derive(Debug, Deserialize)]
pub struct LockEnvironment {
    /// Platform name -> resolved package entries for that platform.
    #[serde(default)]
    pub packages: Option<BTreeMap<String, Vec<PackageEntry>>>,
}

/// One package entry under a platform.
///
/// pixi records conda builds under a `conda:` key and wheels under `pypi:`.
/// Only conda entries are convertible; pypi entries are carried so the
/// walker can skip them explicitly.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageEntry {
    #[serde(default)]
    pub conda: Option<String>,
    #[serde(default)]
    pub pypi: Option<String>,
}

impl LockDocument {
    /// Parses raw pixi.lock content.
    ///
    /// # Errors
    /// Returns an error if the content is not valid YAML or does not fit
    /// the lockfile shape. Structural absence of `environments` is NOT an
    /// error here; the walker reports that as a malformed document.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let content = r#"
version: 5
environments:
  default:
    packages:
      linux-64:
      - conda: https://conda.anaconda.org/conda-forge/linux-64/openssl-3.0.7-h0b41bf4_1.conda
"#;
        let document = LockDocument::parse(content).unwrap();
        assert_eq!(document.version, Some(5));

        let environments = document.environments.unwrap();
        let default_env = environments.get("default").unwrap();
        let packages = default_env.packages.as_ref().unwrap();
        let entries = packages.get("linux-64").unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].conda.as_deref().unwrap().ends_with(".conda"));
        assert!(entries[0].pypi.is_none());
    }

    #[test]
    fn test_parse_pypi_entry() {
        let content = r#"
environments:
  default:
    packages:
      osx-arm64:
      - pypi: https://files.pythonhosted.org/packages/py3/c/click/click-8.1.7-py3-none-any.whl
"#;
        let document = LockDocument::parse(content).unwrap();
        let environments = document.environments.unwrap();
        let entries = environments["default"].packages.as_ref().unwrap()["osx-arm64"].clone();
        assert!(entries[0].conda.is_none());
        assert!(entries[0].pypi.is_some());
    }

    #[test]
    fn test_parse_missing_environments() {
        let content = "version: 5\n";
        let document = LockDocument::parse(content).unwrap();
        assert!(document.environments.is_none());
    }

    #[test]
    fn test_parse_environment_without_packages() {
        let content = r#"
environments:
  default:
    channels:
    - url: https://conda.anaconda.org/conda-forge/
"#;
        let document = LockDocument::parse(content).unwrap();
        let environments = document.environments.unwrap();
        assert!(environments["default"].packages.is_none());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = LockDocument::parse("environments: [unclosed");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let content = r#"
version: 6
environments:
  default:
    channels:
    - url: https://conda.anaconda.org/conda-forge/
    indexes:
    - https://pypi.org/simple
    packages:
      linux-64: []
packages:
- kind: conda
  name: openssl
"#;
        let document = LockDocument::parse(content).unwrap();
        assert!(document.environments.is_some());
    }
}
