/// Lock conversion domain - Pure conversion engine
///
/// This layer contains the package-identity extraction and classification
/// engine: the serde model of pixi.lock, the locator parser, the document
/// walker, the Python/conda classifier, and the record aggregator. Nothing
/// in this layer performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
