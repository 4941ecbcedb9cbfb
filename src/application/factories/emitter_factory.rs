use crate::adapters::outbound::emitters::{
    CondaRequirementsEmitter, ConversionSummaryEmitter, OsvLockfileEmitter, PackageLockEmitter,
    PipRequirementsEmitter,
};
use crate::application::dto::ManifestKind;
use crate::ports::outbound::ManifestEmitter;

/// Factory for creating manifest emitters
///
/// This factory encapsulates the creation logic for the emitter
/// implementations, following the Factory Pattern. It belongs in the
/// application layer as it selects infrastructure adapters based on the
/// requested manifest kind.
pub struct EmitterFactory;

impl EmitterFactory {
    /// Creates an emitter instance for the specified manifest kind
    ///
    /// # Arguments
    /// * `kind` - The manifest kind to create an emitter for
    ///
    /// # Returns
    /// A boxed ManifestEmitter trait object for the specified kind
    pub fn create(kind: ManifestKind) -> Box<dyn ManifestEmitter> {
        match kind {
            ManifestKind::Requirements => Box::new(PipRequirementsEmitter::new()),
            ManifestKind::CondaRequirements => Box::new(CondaRequirementsEmitter::new()),
            ManifestKind::OsvLockfile => Box::new(OsvLockfileEmitter::new()),
            ManifestKind::PackageLock => Box::new(PackageLockEmitter::new()),
            ManifestKind::Summary => Box::new(ConversionSummaryEmitter::new()),
        }
    }
}
