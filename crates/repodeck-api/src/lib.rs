// HTTP client for the repository listing endpoint
pub mod github;

// Re-export common types
pub use github::{GitHubClient, GitHubError, LicenseInfo, UserRepo};
