use std::path::PathBuf;

/// ConvertRequest - Internal request DTO for the conversion use case
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    /// Path to the project directory containing pixi.lock
    pub project_path: PathBuf,
}

impl ConvertRequest {
    pub fn new(project_path: PathBuf) -> Self {
        Self { project_path }
    }
}
