use crate::ports::outbound::OutputPresenter;
use crate::shared::error::ConvertError;
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;

/// DirectoryWriter adapter for writing emitted manifests into an output
/// directory
///
/// This adapter implements the OutputPresenter port. The directory is
/// created on first use; symlinked targets are refused.
pub struct DirectoryWriter {
    output_dir: PathBuf,
}

impl DirectoryWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Ensures the output directory exists and is a real directory.
    fn ensure_output_dir(&self) -> Result<()> {
        if self.output_dir.exists() {
            let metadata = fs::symlink_metadata(&self.output_dir).map_err(|e| {
                ConvertError::FileWriteError {
                    path: self.output_dir.clone(),
                    details: format!("Failed to read output directory metadata: {}", e),
                }
            })?;

            if metadata.is_symlink() {
                return Err(ConvertError::FileWriteError {
                    path: self.output_dir.clone(),
                    details: "Security: Output directory is a symbolic link. For security reasons, writing through symbolic links is not allowed.".to_string(),
                }
                .into());
            }

            if !metadata.is_dir() {
                return Err(ConvertError::FileWriteError {
                    path: self.output_dir.clone(),
                    details: "Output path exists and is not a directory".to_string(),
                }
                .into());
            }
            return Ok(());
        }

        fs::create_dir_all(&self.output_dir).map_err(|e| {
            ConvertError::FileWriteError {
                path: self.output_dir.clone(),
                details: format!("Failed to create output directory: {}", e),
            }
            .into()
        })
    }
}

impl OutputPresenter for DirectoryWriter {
    fn present(&self, file_name: &str, content: &str) -> Result<()> {
        self.ensure_output_dir()?;

        let target = self.output_dir.join(file_name);

        // Refuse to write through an existing symlink.
        if target.exists() {
            let metadata =
                fs::symlink_metadata(&target).map_err(|e| ConvertError::FileWriteError {
                    path: target.clone(),
                    details: format!("Failed to read file metadata: {}", e),
                })?;
            if metadata.is_symlink() {
                return Err(ConvertError::FileWriteError {
                    path: target,
                    details: "Security: Target file is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
                }
                .into());
            }
        }

        fs::write(&target, content).map_err(|e| {
            ConvertError::FileWriteError {
                path: target,
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_present_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("osv-lockfiles");

        let writer = DirectoryWriter::new(output_dir.clone());
        writer.present("requirements.txt", "requests==2.31.0\n").unwrap();

        let written = fs::read_to_string(output_dir.join("requirements.txt")).unwrap();
        assert_eq!(written, "requests==2.31.0\n");
    }

    #[test]
    fn test_present_creates_nested_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("a").join("b");

        let writer = DirectoryWriter::new(output_dir.clone());
        writer.present("out.json", "{}").unwrap();

        assert!(output_dir.join("out.json").exists());
    }

    #[test]
    fn test_present_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().to_path_buf();

        let writer = DirectoryWriter::new(output_dir.clone());
        writer.present("requirements.txt", "old\n").unwrap();
        writer.present("requirements.txt", "new\n").unwrap();

        let written = fs::read_to_string(output_dir.join("requirements.txt")).unwrap();
        assert_eq!(written, "new\n");
    }

    #[test]
    fn test_present_output_path_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocking_file = temp_dir.path().join("blocked");
        fs::write(&blocking_file, "not a directory").unwrap();

        let writer = DirectoryWriter::new(blocking_file);
        let result = writer.present("out.json", "{}");

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("not a directory"));
    }
}
