/// Curated name fragments marking a package as part of the Python
/// ecosystem: the interpreter itself, packaging infrastructure, and a
/// sample of widely-used pure-Python libraries.
///
/// Substring matching against this table is a heuristic, not ground truth.
/// Names without a `py` marker that are absent here classify as conda -
/// the scientific stack (numpy, pandas, scipy, ...) is deliberately left
/// out so the partial coverage stays visible instead of growing an
/// unbounded allowlist.
pub const PYTHON_NAME_FRAGMENTS: &[&str] = &[
    "python",
    "pip",
    "setuptools",
    "wheel",
    "certifi",
    "charset-normalizer",
    "idna",
    "urllib3",
    "requests",
    "flask",
    "django",
    "fastapi",
    "pydantic",
    "sqlalchemy",
    "psycopg2",
    "pymongo",
    "brotli-python",
    "pycparser",
    "pysocks",
    "pyyaml",
    "markupsafe",
    "jinja2",
    "networkx",
    "gitpython",
    "typing_extensions",
];

/// Name-matching policy for Python package detection.
///
/// All rule sets are independent OR conditions evaluated case-insensitively
/// by the classifier:
/// - `fragments`: the curated table above, matched as substrings
/// - `prefixes`: conventional Python package name prefixes (`py...`)
/// - `infixes`: hyphenated binding markers (`...-py...`)
/// - `suffixes`: language-naming suffixes (`...-python`)
/// - `markers`: the language name anywhere in the name
#[derive(Debug, Clone)]
pub struct PythonHeuristic {
    pub fragments: &'static [&'static str],
    pub prefixes: &'static [&'static str],
    pub infixes: &'static [&'static str],
    pub suffixes: &'static [&'static str],
    pub markers: &'static [&'static str],
}

impl PythonHeuristic {
    /// The standard policy used for pixi.lock conversion.
    pub fn standard() -> Self {
        Self {
            fragments: PYTHON_NAME_FRAGMENTS,
            prefixes: &["py"],
            infixes: &["-py"],
            suffixes: &["-python"],
            markers: &["python"],
        }
    }
}

impl Default for PythonHeuristic {
    fn default() -> Self {
        Self::standard()
    }
}
