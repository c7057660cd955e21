use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid version {input:?}: {source}")]
    InvalidVersion {
        input: String,
        #[source]
        source: semver::Error,
    },

    #[error("build metadata is not supported: {0:?}")]
    UnsupportedBuildMetadata(String),
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Repository not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Release listing truncated after {pages} pages")]
    Truncated { pages: usize },
}
