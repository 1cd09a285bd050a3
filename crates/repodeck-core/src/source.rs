use async_trait::async_trait;
use repodeck_api::{GitHubClient, UserRepo};

use crate::{
    models::{License, Repository},
    Result,
};

/// Trait for repository sources - makes testing easier and keeps the fetch
/// seam swappable.
#[async_trait]
pub trait RepoSource: Send + Sync {
    /// List all repositories of the given user or organization.
    async fn list_repos(&self, username: &str) -> Result<Vec<Repository>>;
}

/// Wrapper around GitHubClient that implements RepoSource
pub struct GithubSource {
    client: GitHubClient,
}

impl GithubSource {
    pub fn new(client: GitHubClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RepoSource for GithubSource {
    async fn list_repos(&self, username: &str) -> Result<Vec<Repository>> {
        tracing::debug!(%username, "listing repositories");
        let repos = self.client.list_user_repos(username).await?;
        Ok(repos.into_iter().map(to_repository).collect())
    }
}

/// Convert a wire entry into our internal Repository model
fn to_repository(raw: UserRepo) -> Repository {
    Repository {
        id: raw.id,
        name: raw.name,
        language: raw.language,
        stars: raw.stargazers_count,
        forks: raw.forks_count,
        updated_at: raw.updated_at,
        license: raw.license.map(|l| License { name: l.name }),
    }
}
