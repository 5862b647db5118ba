use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub API error {status} for {url}: {reason}")]
    GitHubApi {
        status: u16,
        reason: String,
        url: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Status code of a failed API call, if this error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::GitHubApi { status, .. } => Some(*status),
            Error::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_carries_status_and_url() {
        let err = Error::GitHubApi {
            status: 404,
            reason: "Not Found".to_string(),
            url: "https://api.github.com/users/ghost".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.to_string(),
            "GitHub API error 404 for https://api.github.com/users/ghost: Not Found"
        );
    }

    #[test]
    fn test_config_error_has_no_status() {
        assert_eq!(Error::Config("bad".to_string()).status(), None);
    }
}
