/// The manifest formats a conversion run can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    /// pip-format requirements.txt (Python-classified packages)
    Requirements,
    /// conda-requirements.txt (all packages)
    CondaRequirements,
    /// Custom OSV manifest (osv-lockfile.json)
    OsvLockfile,
    /// npm-style package-lock.json
    PackageLock,
    /// Conversion report (conversion-summary.json)
    Summary,
}

impl ManifestKind {
    /// Every manifest, in the order a full run writes them.
    pub const ALL: [ManifestKind; 5] = [
        ManifestKind::Requirements,
        ManifestKind::CondaRequirements,
        ManifestKind::OsvLockfile,
        ManifestKind::PackageLock,
        ManifestKind::Summary,
    ];
}

impl std::str::FromStr for ManifestKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "requirements" | "pip" => Ok(ManifestKind::Requirements),
            "conda-requirements" | "conda" => Ok(ManifestKind::CondaRequirements),
            "osv" | "osv-lockfile" => Ok(ManifestKind::OsvLockfile),
            "npm" | "package-lock" => Ok(ManifestKind::PackageLock),
            "summary" => Ok(ManifestKind::Summary),
            _ => Err(format!(
                "Invalid manifest: {}. Please specify one of 'requirements', 'conda-requirements', 'osv', 'npm', 'summary'",
                s
            )),
        }
    }
}
