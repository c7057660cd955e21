//! Latest release per minor line
//!
//! A minor line is every version sharing the same `(major, minor)` pair.
//! For each line that reaches the threshold, only its newest stable release
//! is reported.

use semver::Version;

use crate::version::catalog::VersionCatalog;

/// Select the newest stable release of every minor line at or above `min_version`.
///
/// The result is ordered from highest to lowest precedence and holds at most
/// one version per `(major, minor)` pair. Pre-releases are never selected and
/// `releases` is left untouched.
pub fn select(releases: &[Version], min_version: &Version) -> Vec<Version> {
    let stable = VersionCatalog::new(releases).stable();
    let eligible = VersionCatalog::new(&stable).at_least(min_version);
    let sorted = VersionCatalog::new(&eligible).sorted_descending();

    let mut selected: Vec<Version> = Vec::new();
    let mut current_line: Option<(u64, u64)> = None;

    for release in sorted {
        let line = (release.major, release.minor);
        if current_line != Some(line) {
            current_line = Some(line);
            selected.push(release);
        }
    }

    selected
}
