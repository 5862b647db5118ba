use reqwest::{header, Client};
use serde::de::DeserializeOwned;

use crate::config::{Config, DEFAULT_API_URL};
use crate::error::{Error, Result};
use crate::github::paginator::{Paginator, DEFAULT_PER_PAGE};
use crate::models::{GitHubUser, LanguageByteMap, Repository, UserProfile};

const USER_AGENT: &str = concat!("ghstats/", env!("CARGO_PKG_VERSION"));

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    /// Builds a client against the public API. Without a token requests go
    /// out unauthenticated and get the lower rate limit.
    pub fn new(token: Option<&str>) -> Result<Self> {
        Self::with_base_url(token, DEFAULT_API_URL)
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_base_url(config.github_token.as_deref(), &config.api_base_url)
    }

    pub fn with_base_url(token: Option<&str>, base_url: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = token {
            let mut value = header::HeaderValue::from_str(&format!("Bearer {}", token))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(USER_AGENT),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn fetch_user(&self, username: &str) -> Result<UserProfile> {
        let url = format!("{}/users/{}", self.base_url, username);
        tracing::info!("Fetching user: {}", username);

        let user: GitHubUser = get_json(&self.client, &url).await?;
        Ok(user.into())
    }

    pub async fn fetch_repositories(&self, username: &str) -> Result<Vec<Repository>> {
        let url = format!("{}/users/{}/repos", self.base_url, username);
        tracing::info!("Fetching repositories for: {}", username);
        self.paginate(&url).fetch_all().await
    }

    /// Lazily walks `url` page by page.
    pub fn paginate<T: DeserializeOwned>(&self, url: &str) -> Paginator<'_, T> {
        Paginator::new(&self.client, url, DEFAULT_PER_PAGE)
    }

    pub async fn fetch_language_bytes(&self, endpoint: &str) -> Result<LanguageByteMap> {
        tracing::debug!("Fetching languages: {}", endpoint);
        get_json(&self.client, endpoint).await
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// GET `url` and decode the body. Any non-2xx status is an error.
pub(crate) async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::GitHubApi {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            url: url.to_string(),
        });
    }

    Ok(response.json().await?)
}
