use async_trait::async_trait;

use crate::error::Result;
use crate::github::client::GitHubClient;
use crate::models::LanguageByteMap;

/// Where per-repository language breakdowns come from.
#[async_trait]
pub trait LanguageSource: Send + Sync {
    async fn language_bytes(&self, endpoint: &str) -> Result<LanguageByteMap>;
}

#[async_trait]
impl LanguageSource for GitHubClient {
    async fn language_bytes(&self, endpoint: &str) -> Result<LanguageByteMap> {
        self.fetch_language_bytes(endpoint).await
    }
}
