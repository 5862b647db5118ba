use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_USERNAME: &str = "Himeth777";
pub const DEFAULT_OUTPUT_DIR: &str = "stats";
pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_MAX_LANGUAGES: usize = 8;

#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub github_token: Option<String>,
    pub output_dir: PathBuf,
    pub api_base_url: String,
    pub max_languages: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            github_token: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            api_base_url: DEFAULT_API_URL.to_string(),
            max_languages: DEFAULT_MAX_LANGUAGES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Unset or empty
    /// variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let max_languages = match var("MAX_LANGUAGES") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                Error::Config(format!("MAX_LANGUAGES must be a whole number, got {:?}", raw))
            })?,
            None => defaults.max_languages,
        };

        Ok(Self {
            username: var("GITHUB_USERNAME").unwrap_or(defaults.username),
            github_token: var("GITHUB_TOKEN"),
            output_dir: var("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            api_base_url: var("GITHUB_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            max_languages,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub username: String,
    pub output_dir: PathBuf,
    pub max_languages: usize,
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            username: config.username.clone(),
            output_dir: config.output_dir.clone(),
            max_languages: config.max_languages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.username, "Himeth777");
        assert_eq!(config.github_token, None);
        assert_eq!(config.output_dir, PathBuf::from("stats"));
        assert_eq!(config.api_base_url, "https://api.github.com");
        assert_eq!(config.max_languages, 8);
    }

    #[test]
    fn test_empty_token_means_unauthenticated() {
        let config = Config::from_lookup(lookup(&[("GITHUB_TOKEN", "")])).unwrap();
        assert_eq!(config.github_token, None);
    }

    #[test]
    fn test_overrides_are_read() {
        let config = Config::from_lookup(lookup(&[
            ("GITHUB_USERNAME", "octocat"),
            ("GITHUB_TOKEN", "ghp_secret"),
            ("OUTPUT_DIR", "out/cards"),
            ("GITHUB_API_URL", "http://localhost:8080/"),
            ("MAX_LANGUAGES", "5"),
        ]))
        .unwrap();
        assert_eq!(config.username, "octocat");
        assert_eq!(config.github_token.as_deref(), Some("ghp_secret"));
        assert_eq!(config.output_dir, PathBuf::from("out/cards"));
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.max_languages, 5);
    }

    #[test]
    fn test_bad_max_languages_is_rejected() {
        let err = Config::from_lookup(lookup(&[("MAX_LANGUAGES", "lots")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
