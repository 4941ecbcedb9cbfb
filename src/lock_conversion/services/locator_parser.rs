use regex::Regex;
use std::sync::LazyLock;

use crate::lock_conversion::domain::UNKNOWN_VERSION;

/// Archive extensions stripped before parsing, longest first so the
/// two-part extension wins over its tail.
const ARCHIVE_EXTENSIONS: &[&str] = &[".tar.bz2", ".conda"];

/// Matches `<name>-<version>-<build>` conda filenames.
///
/// The name is extended lazily until a `-<digits[.digits...][alpha]>-`
/// boundary fits, so hyphenated names survive
/// (`brotli-python-1.1.0-py39hf88036b_3` splits at `1.1.0`) and versions
/// may carry an appended alphabetic suffix (`tzdata-2024a-h04d1e81_0`
/// yields `2024a`).
static NAME_VERSION_BUILD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)-(\d+(?:\.\d+)*(?:\w+)?)-.*$").expect("locator pattern must compile")
});

/// Best-effort (name, version) pair recovered from an artifact locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIdentity {
    pub name: String,
    pub version: String,
}

/// A single total parsing attempt. Returns None when the cleaned filename
/// does not fit the strategy's shape.
type ParseStrategy = fn(&str) -> Option<ParsedIdentity>;

/// Ordered candidate strategies; the first producing an identity wins.
/// `parse_locator` itself supplies the always-succeeding fallback.
const STRATEGIES: &[ParseStrategy] = &[match_name_version_build, split_at_version_segment];

/// Extracts a best-effort (name, version) pair from a conda artifact
/// locator such as
/// `https://conda.anaconda.org/conda-forge/linux-64/brotli-python-1.1.0-py39hf88036b_3.conda`.
///
/// Pure and total: malformed input degrades through the strategy chain and
/// ends at the cleaned filename with the `unknown` version sentinel. The
/// returned name is never empty.
pub fn parse_locator(locator: &str) -> ParsedIdentity {
    let filename = clean_filename(locator);
    if filename.is_empty() {
        return ParsedIdentity {
            name: UNKNOWN_VERSION.to_string(),
            version: UNKNOWN_VERSION.to_string(),
        };
    }

    for strategy in STRATEGIES {
        if let Some(identity) = strategy(&filename) {
            return identity;
        }
    }

    ParsedIdentity {
        name: filename,
        version: UNKNOWN_VERSION.to_string(),
    }
}

/// Reduces a locator to its final path segment without query string,
/// fragment, or a known archive extension.
fn clean_filename(locator: &str) -> String {
    let without_query = locator
        .split(['?', '#'])
        .next()
        .unwrap_or(locator);
    let filename = without_query
        .rsplit('/')
        .next()
        .unwrap_or(without_query);

    for extension in ARCHIVE_EXTENSIONS {
        if let Some(stripped) = filename.strip_suffix(extension) {
            return stripped.to_string();
        }
    }
    filename.to_string()
}

/// Strategy 1: full `<name>-<version>-<build>` match.
fn match_name_version_build(filename: &str) -> Option<ParsedIdentity> {
    let captures = NAME_VERSION_BUILD.captures(filename)?;
    Some(ParsedIdentity {
        name: captures[1].to_string(),
        version: captures[2].to_string(),
    })
}

/// Strategy 2: split on hyphens and scan segments from the end toward the
/// start; the first segment beginning with a digit is the version,
/// everything before it (rejoined) is the name. The leading segment is
/// never taken as the version, which keeps the name non-empty.
fn split_at_version_segment(filename: &str) -> Option<ParsedIdentity> {
    let parts: Vec<&str> = filename.split('-').collect();
    if parts.len() < 2 {
        return None;
    }

    for boundary in (1..parts.len()).rev() {
        let starts_with_digit = parts[boundary]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit());
        if starts_with_digit {
            return Some(ParsedIdentity {
                name: parts[..boundary].join("-"),
                version: parts[boundary].to_string(),
            });
        }
    }
    None
}
