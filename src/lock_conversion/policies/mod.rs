/// Classification policies
///
/// Policies are explicit data tables consumed by the classifier service,
/// kept separate from the matching algorithm so either can change or be
/// tested on its own.
pub mod python_policy;

pub use python_policy::{PythonHeuristic, PYTHON_NAME_FRAGMENTS};
