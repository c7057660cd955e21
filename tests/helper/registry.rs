//! Registry test utilities

use std::collections::HashMap;

use async_trait::async_trait;
use semver::Version;

use latest_releases::input::RepoSpec;
use latest_releases::version::error::RegistryError;
use latest_releases::version::registry::Registry;

/// In-memory registry keyed by `owner/name`
#[derive(Default)]
pub struct MockRegistry {
    releases: HashMap<String, Vec<String>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_releases(mut self, repo: &str, tags: Vec<&str>) -> Self {
        self.releases.insert(
            repo.to_string(),
            tags.into_iter().map(|t| t.to_string()).collect(),
        );
        self
    }
}

#[async_trait]
impl Registry for MockRegistry {
    async fn fetch_release_tags(&self, repo: &RepoSpec) -> Result<Vec<String>, RegistryError> {
        match self.releases.get(&repo.to_string()) {
            Some(tags) => Ok(tags.clone()),
            None => Err(RegistryError::NotFound(repo.to_string())),
        }
    }
}

/// Build a RepoSpec from `owner/name` and a minimum version
pub fn repo(path: &str, min_version: &str) -> RepoSpec {
    let (owner, name) = path.split_once('/').unwrap();
    RepoSpec::new(owner, name, Version::parse(min_version).unwrap())
}
