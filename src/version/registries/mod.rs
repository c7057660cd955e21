//! Registry implementations for listing releases

pub mod github;

pub use github::GitHubRegistry;
