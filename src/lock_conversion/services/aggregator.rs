use crate::lock_conversion::domain::PackageRecord;
use crate::lock_conversion::services::classifier::Classifier;
use crate::lock_conversion::services::lock_walker::CondaEntry;
use crate::lock_conversion::services::locator_parser::parse_locator;

/// RecordAggregator service combining walker output with parser and
/// classifier results.
///
/// Produces exactly one record per entry, in walker order. Nothing is
/// dropped and nothing is deduplicated here - set-based emitters own
/// deduplication, since the same package resolved for several platforms
/// must still appear once per platform in the record list.
pub struct RecordAggregator;

impl RecordAggregator {
    pub fn aggregate<I>(entries: I, classifier: &Classifier) -> Vec<PackageRecord>
    where
        I: IntoIterator<Item = CondaEntry>,
    {
        entries
            .into_iter()
            .map(|entry| {
                let identity = parse_locator(&entry.locator);
                let category = classifier.classify(&identity.name);
                PackageRecord::new(
                    identity.name,
                    identity.version,
                    entry.environment,
                    entry.platform,
                    entry.locator,
                    category,
                )
            })
            .collect()
    }
}
