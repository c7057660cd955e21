//! Registry trait for listing the releases of a repository

#[cfg(test)]
use mockall::automock;

use crate::input::RepoSpec;
use crate::version::error::RegistryError;

/// Trait for fetching release tags from a hosting service
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches the tag names of every published release of `repo`
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Raw tag names as published (e.g. "v1.9.3"), unsorted
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_release_tags(&self, repo: &RepoSpec) -> Result<Vec<String>, RegistryError>;
}
