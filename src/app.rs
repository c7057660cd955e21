//! Fetch-then-select pipeline over every repository in the input
//!
//! Each repository is independent: a failed fetch is logged and skipped and
//! the rest still report. Fetches run concurrently with staggered start times;
//! results come back in input order.

use std::time::Duration;

use futures::future::join_all;
use semver::Version;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::config::FETCH_STAGGER_DELAY_MS;
use crate::input::RepoSpec;
use crate::version::registry::Registry;
use crate::version::selector::select;
use crate::version::semver::parse_tags;

/// Newest stable release of every minor line for one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoReport {
    pub repo: RepoSpec,
    pub versions: Vec<Version>,
}

/// Parse raw release tags and select the latest release per minor line.
///
/// Tags that are not semantic versions are logged and ignored.
pub fn latest_from_tags<S: AsRef<str>>(repo: &RepoSpec, tags: &[S]) -> Vec<Version> {
    let (releases, rejected) = parse_tags(tags);
    for e in &rejected {
        warn!("Ignoring release of {}: {}", repo, e);
    }
    debug!(
        "{}: {} parseable releases out of {} tags",
        repo,
        releases.len(),
        tags.len()
    );

    select(&releases, &repo.min_version)
}

/// Fetch and select for a single repository
///
/// Returns None if the registry could not list the releases.
pub async fn check_repository(registry: &dyn Registry, repo: &RepoSpec) -> Option<RepoReport> {
    match registry.fetch_release_tags(repo).await {
        Ok(tags) => {
            info!("Fetched {} releases for {}", tags.len(), repo);
            let versions = latest_from_tags(repo, &tags);
            Some(RepoReport {
                repo: repo.clone(),
                versions,
            })
        }
        Err(e) => {
            error!("Failed to fetch releases for {}: {}", repo, e);
            None
        }
    }
}

/// Check every repository, skipping those whose releases could not be fetched.
///
/// Fetches are executed in parallel with staggered start times to avoid rate limiting.
pub async fn check_repositories(registry: &dyn Registry, repos: &[RepoSpec]) -> Vec<RepoReport> {
    let futures = repos.iter().enumerate().map(|(i, repo)| {
        let delay = Duration::from_millis(FETCH_STAGGER_DELAY_MS * i as u64);
        async move {
            sleep(delay).await;
            check_repository(registry, repo).await
        }
    });

    join_all(futures).await.into_iter().flatten().collect()
}
