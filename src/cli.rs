use clap::Parser;

use crate::application::dto::ManifestKind;

/// Convert pixi.lock files into OSV-Scanner compatible lockfile formats
#[derive(Parser, Debug)]
#[command(name = "pixi-osv")]
#[command(version)]
#[command(
    about = "Convert pixi.lock files into OSV-Scanner compatible lockfile formats",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Output directory for the generated lockfiles
    #[arg(short, long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Emit only the selected manifests: requirements, conda-requirements,
    /// osv, npm, summary. Can be specified multiple times; defaults to all.
    #[arg(long = "only", value_name = "MANIFEST")]
    pub only: Vec<ManifestKind>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The manifests this invocation should emit, in write order and
    /// without duplicates.
    pub fn selected_manifests(&self) -> Vec<ManifestKind> {
        if self.only.is_empty() {
            return ManifestKind::ALL.to_vec();
        }

        let mut selected = Vec::new();
        for kind in &self.only {
            if !selected.contains(kind) {
                selected.push(*kind);
            }
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(only: Vec<ManifestKind>) -> Args {
        Args {
            path: None,
            output_dir: None,
            only,
        }
    }

    #[test]
    fn test_selected_manifests_default_is_all() {
        let args = args_with(vec![]);
        assert_eq!(args.selected_manifests(), ManifestKind::ALL.to_vec());
    }

    #[test]
    fn test_selected_manifests_subset() {
        let args = args_with(vec![ManifestKind::OsvLockfile]);
        assert_eq!(args.selected_manifests(), vec![ManifestKind::OsvLockfile]);
    }

    #[test]
    fn test_selected_manifests_deduplicates_preserving_order() {
        let args = args_with(vec![
            ManifestKind::Summary,
            ManifestKind::Requirements,
            ManifestKind::Summary,
        ]);
        assert_eq!(
            args.selected_manifests(),
            vec![ManifestKind::Summary, ManifestKind::Requirements]
        );
    }

    #[test]
    fn test_args_parse_only_flag() {
        let args = Args::parse_from(["pixi-osv", "--only", "osv", "--only", "npm"]);
        assert_eq!(
            args.selected_manifests(),
            vec![ManifestKind::OsvLockfile, ManifestKind::PackageLock]
        );
    }

    #[test]
    fn test_args_parse_path_and_output_dir() {
        let args = Args::parse_from(["pixi-osv", "-p", "/tmp/project", "-o", "out"]);
        assert_eq!(args.path.as_deref(), Some("/tmp/project"));
        assert_eq!(args.output_dir.as_deref(), Some("out"));
    }
}
