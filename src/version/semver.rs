use semver::Version;

use crate::version::error::ParseError;

/// Parse a strict `MAJOR.MINOR.PATCH[-PRERELEASE]` version.
///
/// Partial versions ("1.2"), a leading `v` and build metadata are rejected.
/// Tags fetched from a registry should go through [`normalize_tag`] first.
pub fn parse_version(text: &str) -> Result<Version, ParseError> {
    let version = Version::parse(text).map_err(|source| ParseError::InvalidVersion {
        input: text.to_string(),
        source,
    })?;

    if !version.build.is_empty() {
        return Err(ParseError::UnsupportedBuildMetadata(text.to_string()));
    }

    Ok(version)
}

/// Strip a single leading `v` or `V` from a release tag.
pub fn normalize_tag(tag: &str) -> &str {
    let tag = tag.trim();
    tag.strip_prefix(['v', 'V']).unwrap_or(tag)
}

/// Parse every tag, skipping (and reporting) the ones that are not versions.
///
/// Returns the parsed versions in input order together with the tags that
/// were rejected.
pub fn parse_tags<S: AsRef<str>>(tags: &[S]) -> (Vec<Version>, Vec<ParseError>) {
    let mut versions = Vec::with_capacity(tags.len());
    let mut rejected = Vec::new();

    for tag in tags {
        match parse_version(normalize_tag(tag.as_ref())) {
            Ok(version) => versions.push(version),
            Err(e) => rejected.push(e),
        }
    }

    (versions, rejected)
}
