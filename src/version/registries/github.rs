//! GitHub Releases API registry implementation

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{FETCH_TIMEOUT_MS, MAX_RELEASE_PAGES, RELEASES_PER_PAGE, USER_AGENT};
use crate::input::RepoSpec;
use crate::version::error::RegistryError;
use crate::version::registry::Registry;

/// Response item from GitHub Releases API
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
    #[serde(default)]
    draft: bool,
}

/// Registry implementation for GitHub Releases API
pub struct GitHubRegistry {
    client: reqwest::Client,
    base_url: String,
    per_page: usize,
    max_pages: usize,
}

impl GitHubRegistry {
    /// Creates a new GitHubRegistry with a custom base URL
    pub fn new(base_url: &str) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_millis(FETCH_TIMEOUT_MS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            per_page: RELEASES_PER_PAGE,
            max_pages: MAX_RELEASE_PAGES,
        })
    }

    /// Overrides the page size and the maximum number of pages fetched
    pub fn with_paging(mut self, per_page: usize, max_pages: usize) -> Self {
        self.per_page = per_page.max(1);
        self.max_pages = max_pages.max(1);
        self
    }

    async fn fetch_page(&self, repo: &RepoSpec, page: usize) -> Result<Vec<Release>, RegistryError> {
        let url = format!(
            "{}/repos/{}/{}/releases?per_page={}&page={}",
            self.base_url, repo.owner, repo.name, self.per_page, page
        );

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(repo.to_string()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(RegistryError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub releases response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })
    }
}

#[async_trait::async_trait]
impl Registry for GitHubRegistry {
    async fn fetch_release_tags(&self, repo: &RepoSpec) -> Result<Vec<String>, RegistryError> {
        let mut tags = Vec::new();

        for page in 1..=self.max_pages {
            let releases = self.fetch_page(repo, page).await?;
            let count = releases.len();
            debug!("Fetched page {} of releases for {}: {} items", page, repo, count);

            tags.extend(
                releases
                    .into_iter()
                    .filter(|r| !r.draft)
                    .map(|r| r.tag_name),
            );

            if count < self.per_page {
                return Ok(tags);
            }
        }

        // Every page was full: the listing only ends here if the next page is empty
        let overflow = self.fetch_page(repo, self.max_pages + 1).await?;
        if !overflow.is_empty() {
            warn!(
                "Release listing for {} exceeds {} pages",
                repo, self.max_pages
            );
            return Err(RegistryError::Truncated {
                pages: self.max_pages,
            });
        }

        Ok(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use semver::Version;

    fn kubernetes() -> RepoSpec {
        RepoSpec::new("kubernetes", "kubernetes", Version::new(1, 8, 0))
    }

    fn page_query(page: &str) -> Matcher {
        Matcher::UrlEncoded("page".into(), page.into())
    }

    #[tokio::test]
    async fn fetch_release_tags_returns_tag_names() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/kubernetes/kubernetes/releases")
            .match_query(page_query("1"))
            .match_header("accept", "application/vnd.github+json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"tag_name": "v1.9.3", "draft": false, "prerelease": false},
                    {"tag_name": "v1.9.0", "draft": false, "prerelease": false},
                    {"tag_name": "v2.0.0-rc.1", "draft": false, "prerelease": true}
                ]"#,
            )
            .create_async()
            .await;

        let registry = GitHubRegistry::new(&server.url()).unwrap();
        let result = registry.fetch_release_tags(&kubernetes()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result, vec!["v1.9.3", "v1.9.0", "v2.0.0-rc.1"]);
    }

    #[tokio::test]
    async fn fetch_release_tags_skips_drafts() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/kubernetes/kubernetes/releases")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"tag_name": "v1.10.0", "draft": true},
                    {"tag_name": "v1.9.3", "draft": false}
                ]"#,
            )
            .create_async()
            .await;

        let registry = GitHubRegistry::new(&server.url()).unwrap();
        let result = registry.fetch_release_tags(&kubernetes()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result, vec!["v1.9.3"]);
    }

    #[tokio::test]
    async fn fetch_release_tags_follows_pages_until_short_page() {
        let mut server = Server::new_async().await;

        let first = server
            .mock("GET", "/repos/kubernetes/kubernetes/releases")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("per_page".into(), "2".into()),
                page_query("1"),
            ]))
            .with_status(200)
            .with_body(r#"[{"tag_name": "v1.9.3"}, {"tag_name": "v1.9.2"}]"#)
            .create_async()
            .await;
        let second = server
            .mock("GET", "/repos/kubernetes/kubernetes/releases")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("per_page".into(), "2".into()),
                page_query("2"),
            ]))
            .with_status(200)
            .with_body(r#"[{"tag_name": "v1.8.5"}]"#)
            .create_async()
            .await;

        let registry = GitHubRegistry::new(&server.url())
            .unwrap()
            .with_paging(2, 5);
        let result = registry.fetch_release_tags(&kubernetes()).await.unwrap();

        first.assert_async().await;
        second.assert_async().await;
        assert_eq!(result, vec!["v1.9.3", "v1.9.2", "v1.8.5"]);
    }

    #[tokio::test]
    async fn fetch_release_tags_fails_when_listing_exceeds_max_pages() {
        let mut server = Server::new_async().await;

        let mut pages = Vec::new();
        for (page, tag) in [("1", "v1.3.0"), ("2", "v1.2.0"), ("3", "v1.1.0")] {
            pages.push(
                server
                    .mock("GET", "/repos/kubernetes/kubernetes/releases")
                    .match_query(page_query(page))
                    .with_status(200)
                    .with_body(format!(r#"[{{"tag_name": "{tag}"}}]"#))
                    .create_async()
                    .await,
            );
        }

        let registry = GitHubRegistry::new(&server.url())
            .unwrap()
            .with_paging(1, 2);
        let result = registry.fetch_release_tags(&kubernetes()).await;

        for mock in &pages {
            mock.assert_async().await;
        }
        assert!(matches!(result, Err(RegistryError::Truncated { pages: 2 })));
    }

    #[tokio::test]
    async fn fetch_release_tags_accepts_listing_ending_exactly_at_max_pages() {
        let mut server = Server::new_async().await;

        let full = server
            .mock("GET", "/repos/kubernetes/kubernetes/releases")
            .match_query(Matcher::AnyOf(vec![page_query("1"), page_query("2")]))
            .with_status(200)
            .with_body(r#"[{"tag_name": "v1.0.0"}]"#)
            .expect(2)
            .create_async()
            .await;
        let empty = server
            .mock("GET", "/repos/kubernetes/kubernetes/releases")
            .match_query(page_query("3"))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let registry = GitHubRegistry::new(&server.url())
            .unwrap()
            .with_paging(1, 2);
        let result = registry.fetch_release_tags(&kubernetes()).await.unwrap();

        full.assert_async().await;
        empty.assert_async().await;
        assert_eq!(result, vec!["v1.0.0", "v1.0.0"]);
    }

    #[tokio::test]
    async fn fetch_release_tags_returns_not_found_for_nonexistent_repo() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/nonexistent/repo/releases")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;

        let registry = GitHubRegistry::new(&server.url()).unwrap();
        let repo = RepoSpec::new("nonexistent", "repo", Version::new(1, 0, 0));
        let result = registry.fetch_release_tags(&repo).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::NotFound(name)) if name == "nonexistent/repo"));
    }

    #[tokio::test]
    async fn fetch_release_tags_returns_rate_limited_for_429() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/kubernetes/kubernetes/releases")
            .match_query(Matcher::Any)
            .with_status(429)
            .with_header("content-type", "application/json")
            .with_header("retry-after", "60")
            .with_body(r#"{"message": "API rate limit exceeded"}"#)
            .create_async()
            .await;

        let registry = GitHubRegistry::new(&server.url()).unwrap();
        let result = registry.fetch_release_tags(&kubernetes()).await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(RegistryError::RateLimited {
                retry_after_secs: Some(60)
            })
        ));
    }

    #[tokio::test]
    async fn fetch_release_tags_returns_invalid_response_for_server_error() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/kubernetes/kubernetes/releases")
            .match_query(Matcher::Any)
            .with_status(502)
            .create_async()
            .await;

        let registry = GitHubRegistry::new(&server.url()).unwrap();
        let result = registry.fetch_release_tags(&kubernetes()).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_release_tags_returns_invalid_response_for_malformed_json() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/kubernetes/kubernetes/releases")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "not a list"}"#)
            .create_async()
            .await;

        let registry = GitHubRegistry::new(&server.url()).unwrap();
        let result = registry.fetch_release_tags(&kubernetes()).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_release_tags_returns_empty_for_repo_without_releases() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/kubernetes/kubernetes/releases")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let registry = GitHubRegistry::new(&server.url()).unwrap();
        let result = registry.fetch_release_tags(&kubernetes()).await.unwrap();

        mock.assert_async().await;
        assert!(result.is_empty());
    }
}
