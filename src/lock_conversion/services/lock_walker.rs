use crate::lock_conversion::domain::LockDocument;
use crate::shared::error::ConvertError;
use crate::shared::Result;

/// One conda-tagged lockfile entry with its resolution context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CondaEntry {
    pub locator: String,
    pub environment: String,
    pub platform: String,
}

/// LockWalker service traversing a parsed pixi.lock document.
///
/// Yields every conda-tagged entry paired with the environment and
/// platform it was resolved under. pypi entries are skipped: only conda
/// builds are convertible by this engine.
pub struct LockWalker;

impl LockWalker {
    /// Walks the document lazily in sorted environment/platform order,
    /// entries in document order within a platform.
    ///
    /// # Errors
    /// Returns `ConvertError::MalformedLockfile` when the top-level
    /// `environments` mapping is absent - the caller gets a distinct
    /// signal instead of an empty result.
    pub fn walk(document: &LockDocument) -> Result<impl Iterator<Item = CondaEntry> + '_> {
        let environments =
            document
                .environments
                .as_ref()
                .ok_or_else(|| ConvertError::MalformedLockfile {
                    details: "missing top-level 'environments' mapping".to_string(),
                })?;

        let entries = environments.iter().flat_map(|(environment, env)| {
            env.packages.iter().flat_map(move |platforms| {
                platforms.iter().flat_map(move |(platform, entries)| {
                    entries.iter().filter_map(move |entry| {
                        entry.conda.as_ref().map(|locator| CondaEntry {
                            locator: locator.clone(),
                            environment: environment.clone(),
                            platform: platform.clone(),
                        })
                    })
                })
            })
        });

        Ok(entries)
    }
}
