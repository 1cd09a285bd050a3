use serde::{Deserialize, Serialize};
use thiserror::Error;

const GITHUB_API_BASE: &str = "https://api.github.com";

/// Fallback shown when the upstream gives us nothing usable.
pub const GENERIC_ERROR: &str = "Something went wrong";

#[derive(Error, Debug)]
pub enum GitHubError {
    /// Message extracted from the error body, surfaced to the user verbatim.
    #[error("{0}")]
    Api(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GitHubError>;

pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new() -> Self {
        Self::with_base_url(GITHUB_API_BASE.to_string())
    }

    /// For GitHub Enterprise instances or testing with a custom API URL
    pub fn with_base_url(base_url: String) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("RepoDeck/0.1.0"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, base_url }
    }

    /// List all public repositories of a user or organization.
    ///
    /// One request, one attempt. The whole result set comes back in a single
    /// response and is paginated client-side.
    pub async fn list_user_repos(&self, username: &str) -> Result<Vec<UserRepo>> {
        let url = format!(
            "{}/users/{}/repos",
            self.base_url,
            urlencoding::encode(username)
        );

        tracing::debug!(%url, "fetching repositories");
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "listing request failed");
            return Err(GitHubError::Api(extract_error_message(&body)));
        }

        let repos: Vec<UserRepo> = response.json().await?;
        Ok(repos)
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull the `message` field out of a GitHub error body, falling back to a
/// generic string when the body is not JSON or carries no message.
fn extract_error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| GENERIC_ERROR.to_string())
}

/// One entry of the listing response. Field names mirror the upstream JSON;
/// counts default to zero when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRepo {
    pub id: u64,
    pub name: String,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    pub updated_at: String,
    pub license: Option<LicenseInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseInfo {
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_message_from_error_body() {
        let body = r#"{"message":"Not Found","documentation_url":"https://docs.github.com"}"#;
        assert_eq!(extract_error_message(body), "Not Found");
    }

    #[test]
    fn falls_back_on_non_json_body() {
        assert_eq!(extract_error_message("<html>502</html>"), GENERIC_ERROR);
    }

    #[test]
    fn falls_back_on_empty_message() {
        assert_eq!(extract_error_message(r#"{"message":""}"#), GENERIC_ERROR);
        assert_eq!(extract_error_message(r#"{"status":"404"}"#), GENERIC_ERROR);
    }

    #[test]
    fn decodes_listing_entry_with_nulls() {
        let json = r#"{
            "id": 1296269,
            "name": "Hello-World",
            "language": null,
            "stargazers_count": 80,
            "forks_count": 9,
            "updated_at": "2011-01-26T19:14:43Z",
            "license": null
        }"#;
        let repo: UserRepo = serde_json::from_str(json).unwrap();
        assert_eq!(repo.id, 1296269);
        assert_eq!(repo.name, "Hello-World");
        assert!(repo.language.is_none());
        assert!(repo.license.is_none());
    }

    #[test]
    fn missing_counts_default_to_zero() {
        let json = r#"{
            "id": 7,
            "name": "bare",
            "language": "Rust",
            "updated_at": "2023-03-05T00:00:00Z",
            "license": {"name": null}
        }"#;
        let repo: UserRepo = serde_json::from_str(json).unwrap();
        assert_eq!(repo.stargazers_count, 0);
        assert_eq!(repo.forks_count, 0);
        assert!(repo.license.unwrap().name.is_none());
    }
}
