//! Repositories file parser
//!
//! One repository per line:
//!
//! ```text
//! repository,min_version
//! kubernetes/kubernetes,1.8.0
//! prometheus/prometheus,v2.2.0
//! ```
//!
//! Blank lines, `#` comments and the optional header are ignored. A line that
//! does not parse is reported and skipped; the remaining lines still load.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use semver::Version;
use thiserror::Error;
use tracing::warn;

use crate::version::error::ParseError;
use crate::version::semver::{normalize_tag, parse_version};

/// `owner/name,version`, whitespace allowed around each field
static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)\s*,\s*([^\s,]+)\s*$").unwrap()
});

const HEADER: &str = "repository,min_version";

/// A repository to check and the lowest version worth reporting for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSpec {
    pub owner: String,
    pub name: String,
    pub min_version: Version,
}

impl RepoSpec {
    pub fn new(owner: &str, name: &str, min_version: Version) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
            min_version,
        }
    }
}

impl fmt::Display for RepoSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Error)]
#[error("failed to read repositories file {}: {source}", .path.display())]
pub struct InputReadError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// A line of the repositories file that could not be parsed
#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct LineError {
    /// 1-based line number
    pub line: usize,
    pub kind: LineErrorKind,
}

#[derive(Debug, Error)]
pub enum LineErrorKind {
    #[error("expected `owner/name,min_version`, got {0:?}")]
    Malformed(String),

    #[error("invalid minimum version: {0}")]
    InvalidVersion(#[from] ParseError),
}

/// Result of parsing a repositories file
#[derive(Debug, Default)]
pub struct RepoList {
    pub repos: Vec<RepoSpec>,
    pub errors: Vec<LineError>,
}

/// Parse the contents of a repositories file.
pub fn parse_repo_list(content: &str) -> RepoList {
    let mut list = RepoList::default();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if index == 0 && is_header(trimmed) {
            continue;
        }

        match parse_line(trimmed) {
            Ok(repo) => list.repos.push(repo),
            Err(kind) => list.errors.push(LineError {
                line: index + 1,
                kind,
            }),
        }
    }

    list
}

/// Read and parse a repositories file, logging every skipped line.
pub fn read_repo_file(path: &Path) -> Result<Vec<RepoSpec>, InputReadError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputReadError {
        path: path.to_path_buf(),
        source,
    })?;

    let list = parse_repo_list(&content);
    for e in &list.errors {
        warn!("Skipping {}: {}", path.display(), e);
    }

    Ok(list.repos)
}

fn is_header(line: &str) -> bool {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    compact.eq_ignore_ascii_case(HEADER)
}

fn parse_line(line: &str) -> Result<RepoSpec, LineErrorKind> {
    let caps = LINE_RE
        .captures(line)
        .ok_or_else(|| LineErrorKind::Malformed(line.to_string()))?;

    let min_version = parse_version(normalize_tag(&caps[3]))?;

    Ok(RepoSpec::new(&caps[1], &caps[2], min_version))
}
