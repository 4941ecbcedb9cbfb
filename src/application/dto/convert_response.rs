use crate::lock_conversion::domain::{ConversionMetadata, PackageRecord};

/// ConvertResponse - Internal response DTO from the conversion use case
///
/// Carries the aggregated record list and run metadata; emitters turn
/// these into the target manifest formats.
#[derive(Debug, Clone)]
pub struct ConvertResponse {
    /// Aggregated package records, in walker order
    pub records: Vec<PackageRecord>,
    /// Metadata describing the conversion run
    pub metadata: ConversionMetadata,
}

impl ConvertResponse {
    pub fn new(records: Vec<PackageRecord>, metadata: ConversionMetadata) -> Self {
        Self { records, metadata }
    }
}
