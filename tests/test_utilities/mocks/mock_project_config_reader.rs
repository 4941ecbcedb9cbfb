use pixi_osv::prelude::*;
use std::path::Path;

/// Mock ProjectConfigReader for testing
pub struct MockProjectConfigReader {
    pub project_name: Option<String>,
}

impl MockProjectConfigReader {
    pub fn new(project_name: String) -> Self {
        Self {
            project_name: Some(project_name),
        }
    }

    /// Simulates a project directory without a readable pixi.toml.
    pub fn without_manifest() -> Self {
        Self { project_name: None }
    }
}

impl ProjectConfigReader for MockProjectConfigReader {
    fn read_project_name(&self, _project_path: &Path) -> Result<String> {
        match &self.project_name {
            Some(name) => Ok(name.clone()),
            None => anyhow::bail!("pixi.toml not found in project directory"),
        }
    }
}
