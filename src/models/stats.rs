use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserProfile;

/// Counters summed over every fetched repository, forks included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoAggregateStats {
    pub total_stars: u64,
    pub total_forks: u64,
    pub total_open_issues: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub language: String,
    pub bytes: u64,
    pub percentage: f64,
}

impl LanguageShare {
    pub fn new(language: impl Into<String>, bytes: u64, percentage: f64) -> Self {
        Self {
            language: language.into(),
            bytes,
            percentage,
        }
    }
}

/// Ranked language shares, largest byte count first.
pub type LanguageDistribution = Vec<LanguageShare>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsSummary {
    pub user: UserProfile,
    pub repositories: usize,
    pub totals: RepoAggregateStats,
    pub languages: LanguageDistribution,
    pub generated_at: DateTime<Utc>,
}
