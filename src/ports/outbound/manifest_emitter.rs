use crate::lock_conversion::domain::{ConversionMetadata, PackageRecord};
use crate::shared::Result;

/// ManifestEmitter port for producing scanner-consumable manifests
///
/// This port abstracts the pure transformation from the aggregated record
/// list into one target format (requirements text, OSV JSON, npm-style
/// JSON, ...). Emitters never touch the file system; presenting the
/// emitted content is the OutputPresenter's job.
pub trait ManifestEmitter {
    /// The file name this manifest is conventionally written to
    fn file_name(&self) -> &'static str;

    /// Emits the manifest content for the given record list
    ///
    /// # Arguments
    /// * `records` - Aggregated package records, in walker order
    /// * `metadata` - Metadata describing the conversion run
    ///
    /// # Returns
    /// The complete manifest content as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn emit(&self, records: &[PackageRecord], metadata: &ConversionMetadata) -> Result<String>;
}
