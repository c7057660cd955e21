//! Precedence-ordered view over a set of semantic versions
//!
//! Every operation returns new data; the slice a catalog is built from is
//! never reordered or modified.

use semver::Version;

/// Return `versions` ordered from highest to lowest precedence.
pub fn sort_descending(versions: &[Version]) -> Vec<Version> {
    let mut sorted = versions.to_vec();
    sorted.sort_by(|a, b| b.cmp(a));
    sorted
}

/// Borrowed view over a caller-owned collection of versions
#[derive(Debug, Clone, Copy)]
pub struct VersionCatalog<'a> {
    versions: &'a [Version],
}

impl<'a> VersionCatalog<'a> {
    pub fn new(versions: &'a [Version]) -> Self {
        Self { versions }
    }

    /// Versions without pre-release identifiers, in catalog order
    pub fn stable(&self) -> Vec<Version> {
        self.versions
            .iter()
            .filter(|v| v.pre.is_empty())
            .cloned()
            .collect()
    }

    /// Versions greater than or equal to `min_version`, in catalog order
    pub fn at_least(&self, min_version: &Version) -> Vec<Version> {
        self.versions
            .iter()
            .filter(|v| *v >= min_version)
            .cloned()
            .collect()
    }

    pub fn sorted_descending(&self) -> Vec<Version> {
        sort_descending(self.versions)
    }
}
