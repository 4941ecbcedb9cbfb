use crate::lock_conversion::domain::{ConversionMetadata, PackageRecord};
use crate::ports::outbound::ManifestEmitter;
use crate::shared::Result;
use std::collections::BTreeSet;

/// CondaRequirementsEmitter for conda-requirements.txt
///
/// Same pin format as the pip output, but over every converted record
/// regardless of classification.
pub struct CondaRequirementsEmitter;

impl CondaRequirementsEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CondaRequirementsEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestEmitter for CondaRequirementsEmitter {
    fn file_name(&self) -> &'static str {
        "conda-requirements.txt"
    }

    fn emit(&self, records: &[PackageRecord], _metadata: &ConversionMetadata) -> Result<String> {
        let pins: BTreeSet<String> = records.iter().map(|r| r.requirement()).collect();

        let mut output = String::new();
        for pin in &pins {
            output.push_str(pin);
            output.push('\n');
        }
        Ok(output)
    }
}
