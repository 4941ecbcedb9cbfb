/// Shared utilities and error types
///
/// Common error handling infrastructure used across all layers.
pub mod error;
pub mod result;

pub use result::Result;
