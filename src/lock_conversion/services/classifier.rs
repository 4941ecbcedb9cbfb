use crate::lock_conversion::domain::PackageCategory;
use crate::lock_conversion::policies::PythonHeuristic;

/// Classifier service bucketing package names into Python vs conda.
///
/// The matching algorithm is total and case-insensitive; the rules come
/// from an injected [`PythonHeuristic`] policy table. Misclassification is
/// an accepted limitation of name matching, not an error condition.
pub struct Classifier {
    policy: PythonHeuristic,
}

impl Classifier {
    pub fn new(policy: PythonHeuristic) -> Self {
        Self { policy }
    }

    /// Returns the ecosystem bucket for a package name. The checks are
    /// independent OR conditions; any hit classifies the name as Python.
    pub fn classify(&self, name: &str) -> PackageCategory {
        let name = name.to_lowercase();
        let policy = &self.policy;

        let is_python = policy.fragments.iter().any(|f| name.contains(f))
            || policy.prefixes.iter().any(|p| name.starts_with(p))
            || policy.infixes.iter().any(|i| name.contains(i))
            || policy.suffixes.iter().any(|s| name.ends_with(s))
            || policy.markers.iter().any(|m| name.contains(m));

        if is_python {
            PackageCategory::Python
        } else {
            PackageCategory::Conda
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(PythonHeuristic::standard())
    }
}
