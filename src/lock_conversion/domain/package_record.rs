/// Ecosystem tag attached to every converted record.
///
/// The converter only parses conda-tagged lockfile entries, so the tag is
/// fixed rather than derived per record.
pub const CONDA_ECOSYSTEM: &str = "conda";

/// Sentinel version used when no version token could be recovered from an
/// artifact locator.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Heuristic ecosystem bucket assigned to a package name.
///
/// `Python` means the name matched the Python naming heuristic and the
/// package is included in the pip-format requirements output; everything
/// else stays `Conda`. This is a name-based guess, not ground truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageCategory {
    Python,
    Conda,
}

impl PackageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageCategory::Python => "python",
            PackageCategory::Conda => "conda",
        }
    }
}

impl std::fmt::Display for PackageCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One converted package record.
///
/// Exactly one record exists per conda entry in the source document; the
/// same package resolved for several platforms or environments yields one
/// record each. Records are immutable once aggregated - emitters only
/// filter and group them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    name: String,
    version: String,
    environment: String,
    platform: String,
    url: String,
    category: PackageCategory,
}

impl PackageRecord {
    pub fn new(
        name: String,
        version: String,
        environment: String,
        platform: String,
        url: String,
        category: PackageCategory,
    ) -> Self {
        Self {
            name,
            version,
            environment,
            platform,
            url,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// The original artifact locator the record was derived from.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn category(&self) -> PackageCategory {
        self.category
    }

    pub fn ecosystem(&self) -> &'static str {
        CONDA_ECOSYSTEM
    }

    /// Whether a version token was recovered from the locator.
    pub fn has_known_version(&self) -> bool {
        self.version != UNKNOWN_VERSION
    }

    /// Pip-style pin: `name==version`, or the bare name when the version
    /// is unknown.
    pub fn requirement(&self) -> String {
        if self.has_known_version() {
            format!("{}=={}", self.name, self.version)
        } else {
            self.name.clone()
        }
    }

    /// Manifest key: `name@version`.
    pub fn key(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}
