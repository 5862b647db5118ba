use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};

use crate::analysis::aggregator::{aggregate_languages, aggregate_repo_stats, ExclusionPolicy};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::github::{GitHubClient, LanguageSource};
use crate::models::{LanguageByteMap, StatsSummary};
use crate::render::{render_languages_card, render_stats_card, Theme};

pub const STATS_CARD_FILE: &str = "github-stats.svg";
pub const LANGUAGES_CARD_FILE: &str = "top-langs.svg";

pub struct StatsPipeline {
    github: GitHubClient,
    policy: ExclusionPolicy,
    theme: Theme,
    config: PipelineConfig,
}

/// What a run produced.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub summary: StatsSummary,
    pub stats_card: PathBuf,
    pub languages_card: PathBuf,
}

impl StatsPipeline {
    pub fn new(github: GitHubClient, config: PipelineConfig) -> Self {
        Self {
            github,
            policy: ExclusionPolicy::default(),
            theme: Theme::default(),
            config,
        }
    }

    pub fn with_policy(mut self, policy: ExclusionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Fetches everything, then renders and writes both cards. Nothing is
    /// written unless every request succeeded.
    pub async fn run(&self) -> Result<RunOutput> {
        let summary = self.collect().await?;

        let stats_svg = render_stats_card(&summary.user, &summary.totals, &self.theme);
        let languages_svg =
            render_languages_card(&summary.languages, self.config.max_languages, &self.theme);

        let (stats_card, languages_card) =
            write_cards(&self.config.output_dir, &stats_svg, &languages_svg)?;

        Ok(RunOutput {
            summary,
            stats_card,
            languages_card,
        })
    }

    pub async fn collect(&self) -> Result<StatsSummary> {
        let username = &self.config.username;

        let user = self.github.fetch_user(username).await?;
        tracing::info!(
            "Name: {}, Repos: {}",
            user.display_name,
            user.public_repo_count
        );

        let repos = self.github.fetch_repositories(username).await?;
        let totals = aggregate_repo_stats(&repos);
        tracing::info!(
            "Found {} repositories (stars: {}, forks: {})",
            repos.len(),
            totals.total_stars,
            totals.total_forks
        );

        let eligible = repos.iter().filter(|r| self.policy.admits(r)).count();
        tracing::info!("Fetching language stats for {} repositories", eligible);

        let tracked = Tracked::new(&self.github, eligible as u64);
        let languages = aggregate_languages(&repos, &tracked, &self.policy).await?;
        tracked.finish();

        for share in languages.iter().take(self.config.max_languages) {
            tracing::info!("  {}: {:.1}%", share.language, share.percentage);
        }

        Ok(StatsSummary {
            user,
            repositories: repos.len(),
            totals,
            languages,
            generated_at: Utc::now(),
        })
    }
}

pub fn write_cards(
    output_dir: &Path,
    stats_svg: &str,
    languages_svg: &str,
) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(output_dir)?;

    let stats_path = output_dir.join(STATS_CARD_FILE);
    std::fs::write(&stats_path, stats_svg)?;
    tracing::info!("Generated {}", stats_path.display());

    let languages_path = output_dir.join(LANGUAGES_CARD_FILE);
    std::fs::write(&languages_path, languages_svg)?;
    tracing::info!("Generated {}", languages_path.display());

    Ok((stats_path, languages_path))
}

/// Advances a progress bar after each language fetch.
struct Tracked<'a, S: ?Sized> {
    inner: &'a S,
    pb: ProgressBar,
}

impl<'a, S: LanguageSource + ?Sized> Tracked<'a, S> {
    fn new(inner: &'a S, len: u64) -> Self {
        let pb = ProgressBar::new(len);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} repos")
            .map(|style| style.progress_chars("#>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        Self { inner, pb }
    }

    fn finish(&self) {
        self.pb.finish_and_clear();
    }
}

#[async_trait]
impl<'a, S: LanguageSource + ?Sized> LanguageSource for Tracked<'a, S> {
    async fn language_bytes(&self, endpoint: &str) -> Result<LanguageByteMap> {
        let bytes = self.inner.language_bytes(endpoint).await?;
        self.pb.inc(1);
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_cards_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("stats");

        let (stats, langs) = write_cards(&out, "<svg>a</svg>", "<svg>b</svg>").unwrap();

        assert_eq!(stats, out.join("github-stats.svg"));
        assert_eq!(langs, out.join("top-langs.svg"));
        assert_eq!(std::fs::read_to_string(stats).unwrap(), "<svg>a</svg>");
        assert_eq!(std::fs::read_to_string(langs).unwrap(), "<svg>b</svg>");
    }
}
