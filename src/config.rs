use std::path::PathBuf;

// =============================================================================
// GitHub API
// =============================================================================

/// Default base URL for the GitHub REST API
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// User agent sent with every request (GitHub rejects requests without one)
pub const USER_AGENT: &str = concat!("latest-releases/", env!("CARGO_PKG_VERSION"));

/// Releases requested per page (GitHub caps this at 100)
pub const RELEASES_PER_PAGE: usize = 100;

/// Upper bound on pages fetched for a single repository
pub const MAX_RELEASE_PAGES: usize = 10;

// =============================================================================
// Time-related constants
// =============================================================================

/// Timeout for a single HTTP request in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Delay between starting each fetch request to avoid rate limiting (10ms)
pub const FETCH_STAGGER_DELAY_MS: u64 = 10;

/// Returns the path to the data directory for latest-releases.
/// Uses $XDG_DATA_HOME/latest-releases if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/latest-releases,
/// or ./latest-releases if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("latest-releases.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("latest-releases")
}
