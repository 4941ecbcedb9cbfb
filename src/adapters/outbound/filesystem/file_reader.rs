use crate::ports::outbound::{LockfileReader, ProjectConfigReader};
use crate::shared::error::ConvertError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements both LockfileReader and ProjectConfigReader
/// ports, providing file system access for pixi.lock and pixi.toml.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_type, e))?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_FILE_SIZE
            );
        }

        fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }
}

impl LockfileReader for FileSystemReader {
    fn read_lockfile(&self, project_path: &Path) -> Result<String> {
        let lockfile_path = project_path.join("pixi.lock");

        if !lockfile_path.exists() {
            return Err(ConvertError::LockfileNotFound {
                path: lockfile_path.clone(),
                suggestion: format!(
                    "pixi.lock does not exist in project directory \"{}\".\n   \
                     Please run in the root directory of a pixi project, or specify the correct path with the --path option.",
                    project_path.display()
                ),
            }
            .into());
        }

        self.safe_read_file(&lockfile_path, "pixi.lock").map_err(|e| {
            ConvertError::FileReadError {
                path: lockfile_path,
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl ProjectConfigReader for FileSystemReader {
    fn read_project_name(&self, project_path: &Path) -> Result<String> {
        let manifest_path = project_path.join("pixi.toml");

        if !manifest_path.exists() {
            anyhow::bail!("pixi.toml not found in project directory");
        }

        let manifest_content = self.safe_read_file(&manifest_path, "pixi.toml")?;

        let manifest: toml::Value = toml::from_str(&manifest_content)
            .map_err(|e| anyhow::anyhow!("Failed to parse pixi.toml: {}", e))?;

        // Recent pixi manifests use [workspace]; older ones used [project].
        let project_name = manifest
            .get("workspace")
            .or_else(|| manifest.get("project"))
            .and_then(|t| t.get("name"))
            .and_then(|n| n.as_str())
            .ok_or_else(|| anyhow::anyhow!("Project name not found in pixi.toml"))?;

        Ok(project_name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_lockfile_success() {
        let temp_dir = TempDir::new().unwrap();
        let lockfile_path = temp_dir.path().join("pixi.lock");
        fs::write(&lockfile_path, "version: 5\nenvironments: {}\n").unwrap();

        let reader = FileSystemReader::new();
        let content = reader.read_lockfile(temp_dir.path()).unwrap();

        assert_eq!(content, "version: 5\nenvironments: {}\n");
    }

    #[test]
    fn test_read_lockfile_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_lockfile(temp_dir.path());

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("pixi.lock does not exist"));
    }

    #[test]
    fn test_read_project_name_workspace_table() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("pixi.toml"),
            r#"
[workspace]
name = "data-pipeline"
channels = ["conda-forge"]
platforms = ["linux-64"]
"#,
        )
        .unwrap();

        let reader = FileSystemReader::new();
        let project_name = reader.read_project_name(temp_dir.path()).unwrap();

        assert_eq!(project_name, "data-pipeline");
    }

    #[test]
    fn test_read_project_name_legacy_project_table() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("pixi.toml"),
            r#"
[project]
name = "legacy-project"
channels = ["conda-forge"]
platforms = ["linux-64"]
"#,
        )
        .unwrap();

        let reader = FileSystemReader::new();
        let project_name = reader.read_project_name(temp_dir.path()).unwrap();

        assert_eq!(project_name, "legacy-project");
    }

    #[test]
    fn test_read_project_name_file_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_project_name(temp_dir.path());

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("pixi.toml not found"));
    }

    #[test]
    fn test_read_project_name_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pixi.toml"), "invalid toml [[[").unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_project_name(temp_dir.path());

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to parse pixi.toml"));
    }

    #[test]
    fn test_read_project_name_missing_name_field() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("pixi.toml"),
            r#"
[workspace]
channels = ["conda-forge"]
"#,
        )
        .unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_project_name(temp_dir.path());

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Project name not found"));
    }
}
