use thiserror::Error;

/// All the ways a search can go wrong.
///
/// thiserror generates the Display and Error boilerplate for us.
#[derive(Error, Debug)]
pub enum Error {
    /// Upstream rejected the request with a usable message body.
    #[error("{0}")]
    Api(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    /// What the user sees in the results pane. API messages (e.g. "Not Found")
    /// are shown verbatim; transport and decode failures collapse into a
    /// generic fallback, with the detail left to the logs.
    pub fn user_message(&self) -> String {
        match self {
            Error::Api(msg) => msg.clone(),
            _ => repodeck_api::github::GENERIC_ERROR.to_string(),
        }
    }
}

impl From<repodeck_api::GitHubError> for Error {
    fn from(err: repodeck_api::GitHubError) -> Self {
        use repodeck_api::GitHubError;
        match err {
            GitHubError::Api(msg) => Error::Api(msg),
            GitHubError::NetworkError(e) => Error::NetworkError(e),
            GitHubError::ParseError(e) => Error::SerializationError(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_message_is_shown_verbatim() {
        let err = Error::Api("Not Found".to_string());
        assert_eq!(err.user_message(), "Not Found");
        assert_eq!(err.to_string(), "Not Found");
    }

    #[test]
    fn decode_failure_uses_generic_fallback() {
        let json_err = serde_json::from_str::<Vec<u8>>("oops").unwrap_err();
        let err = Error::from(repodeck_api::GitHubError::ParseError(json_err));
        assert_eq!(err.user_message(), "Something went wrong");
    }
}
