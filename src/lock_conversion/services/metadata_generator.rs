use chrono::Utc;

use crate::lock_conversion::domain::ConversionMetadata;

/// MetadataGenerator service for stamping conversion runs.
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates metadata with the current timestamp.
    ///
    /// # Arguments
    /// * `source_file` - Name of the converted lockfile
    /// * `project_name` - Name of the converted project
    pub fn generate(source_file: &str, project_name: &str) -> ConversionMetadata {
        ConversionMetadata::new(
            Utc::now().to_rfc3339(),
            "pixi-osv".to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
            source_file.to_string(),
            project_name.to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_metadata() {
        let metadata = MetadataGenerator::generate("pixi.lock", "my-project");

        assert_eq!(metadata.tool_name(), "pixi-osv");
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(metadata.source_file(), "pixi.lock");
        assert_eq!(metadata.project_name(), "my-project");
    }

    #[test]
    fn test_generate_metadata_timestamp_format() {
        let metadata = MetadataGenerator::generate("pixi.lock", "my-project");
        let timestamp = metadata.generated_at();

        // RFC3339 format contains 'T' and timezone info.
        assert!(timestamp.contains('T'));
        assert!(timestamp.contains('+') || timestamp.contains('Z'));
    }
}
