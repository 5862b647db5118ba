use std::collections::HashSet;

use indexmap::IndexMap;

use crate::error::Result;
use crate::github::LanguageSource;
use crate::models::{LanguageDistribution, LanguageShare, RepoAggregateStats, Repository};

/// Notebook byte counts are mostly serialized cell output and metadata.
pub const NOTEBOOK_LANGUAGE: &str = "Jupyter Notebook";

/// Languages that never count towards the distribution. A repository whose
/// primary language is excluded is skipped as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionPolicy {
    languages: HashSet<String>,
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self::new([NOTEBOOK_LANGUAGE])
    }
}

impl ExclusionPolicy {
    pub fn new<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            languages: languages.into_iter().map(Into::into).collect(),
        }
    }

    pub fn none() -> Self {
        Self::new(std::iter::empty::<String>())
    }

    pub fn is_excluded(&self, language: &str) -> bool {
        self.languages.contains(language)
    }

    /// Whether `repo` contributes to the language distribution at all.
    pub fn admits(&self, repo: &Repository) -> bool {
        if repo.is_fork || repo.language_breakdown_endpoint.is_none() {
            return false;
        }
        !repo
            .primary_language
            .as_deref()
            .is_some_and(|lang| self.is_excluded(lang))
    }
}

/// Sums stars, forks and open issues over every repository, forks included.
pub fn aggregate_repo_stats(repos: &[Repository]) -> RepoAggregateStats {
    repos
        .iter()
        .fold(RepoAggregateStats::default(), |mut totals, repo| {
            totals.total_stars = totals.total_stars.saturating_add(repo.star_count);
            totals.total_forks = totals.total_forks.saturating_add(repo.fork_count);
            totals.total_open_issues = totals
                .total_open_issues
                .saturating_add(repo.open_issue_count);
            totals
        })
}

/// Merges the language breakdowns of every admitted repository into a ranked
/// percentage distribution. Breakdowns are fetched one repository at a time
/// and only for repositories the policy admits.
pub async fn aggregate_languages<S>(
    repos: &[Repository],
    source: &S,
    policy: &ExclusionPolicy,
) -> Result<LanguageDistribution>
where
    S: LanguageSource + ?Sized,
{
    let mut totals: IndexMap<String, u64> = IndexMap::new();

    for repo in repos.iter().filter(|r| policy.admits(r)) {
        let Some(endpoint) = repo.language_breakdown_endpoint.as_deref() else {
            continue;
        };

        let bytes = source.language_bytes(endpoint).await?;
        tracing::debug!("{}: {} languages", repo.name, bytes.len());

        for (language, count) in bytes {
            if policy.is_excluded(&language) {
                continue;
            }
            let entry = totals.entry(language).or_insert(0);
            *entry = entry.saturating_add(count);
        }
    }

    Ok(rank(totals))
}

/// Converts byte totals into percentages, largest first. Equal totals keep
/// their first-seen order.
pub fn rank(totals: IndexMap<String, u64>) -> LanguageDistribution {
    let grand_total = match totals.values().sum::<u64>() {
        0 => 1,
        n => n,
    };

    let mut ranked: Vec<(String, u64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .map(|(language, bytes)| {
            let percentage = bytes as f64 / grand_total as f64 * 100.0;
            LanguageShare::new(language, bytes, percentage)
        })
        .collect()
}
