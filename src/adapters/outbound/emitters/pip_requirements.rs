use crate::lock_conversion::domain::{ConversionMetadata, PackageCategory, PackageRecord};
use crate::ports::outbound::ManifestEmitter;
use crate::shared::Result;
use std::collections::BTreeSet;

/// PipRequirementsEmitter for pip-format requirements.txt
///
/// Emits `name==version` pins for Python-classified records only. The
/// same package resolved for several platforms or environments collapses
/// to one line; output is sorted.
pub struct PipRequirementsEmitter;

impl PipRequirementsEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PipRequirementsEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestEmitter for PipRequirementsEmitter {
    fn file_name(&self) -> &'static str {
        "requirements.txt"
    }

    fn emit(&self, records: &[PackageRecord], _metadata: &ConversionMetadata) -> Result<String> {
        let pins: BTreeSet<String> = records
            .iter()
            .filter(|r| r.category() == PackageCategory::Python)
            .map(|r| r.requirement())
            .collect();

        let mut output = String::new();
        for pin in &pins {
            output.push_str(pin);
            output.push('\n');
        }
        Ok(output)
    }
}
