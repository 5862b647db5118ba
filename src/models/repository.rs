use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Bytes per language for one repository, in the order GitHub lists them.
pub type LanguageByteMap = IndexMap<String, u64>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(rename = "fork", default)]
    pub is_fork: bool,
    #[serde(rename = "stargazers_count", default)]
    pub star_count: u64,
    #[serde(rename = "forks_count", default)]
    pub fork_count: u64,
    #[serde(rename = "open_issues_count", default)]
    pub open_issue_count: u64,
    #[serde(rename = "language", default)]
    pub primary_language: Option<String>,
    #[serde(rename = "languages_url", default)]
    pub language_breakdown_endpoint: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_github_repo_record() {
        let repo: Repository = serde_json::from_str(
            r#"{
                "name": "dotfiles",
                "fork": true,
                "stargazers_count": 12,
                "forks_count": 3,
                "open_issues_count": 1,
                "language": "Shell",
                "languages_url": "https://api.github.com/repos/octocat/dotfiles/languages",
                "watchers_count": 12
            }"#,
        )
        .unwrap();
        assert!(repo.is_fork);
        assert_eq!(repo.star_count, 12);
        assert_eq!(repo.fork_count, 3);
        assert_eq!(repo.open_issue_count, 1);
        assert_eq!(repo.primary_language.as_deref(), Some("Shell"));
        assert!(repo.language_breakdown_endpoint.is_some());
    }

    #[test]
    fn test_missing_fields_default() {
        let repo: Repository =
            serde_json::from_str(r#"{"name": "empty", "language": null}"#).unwrap();
        assert!(!repo.is_fork);
        assert_eq!(repo.star_count, 0);
        assert_eq!(repo.primary_language, None);
        assert_eq!(repo.language_breakdown_endpoint, None);
    }

    #[test]
    fn test_language_map_keeps_response_order() {
        let map: LanguageByteMap =
            serde_json::from_str(r#"{"Rust": 10, "C": 10, "Shell": 2}"#).unwrap();
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["Rust", "C", "Shell"]);
    }
}
