use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ghstats::{Config, GitHubClient, PipelineConfig, StatsPipeline};

#[derive(Parser, Debug)]
#[command(name = "ghstats")]
#[command(version)]
#[command(about = "Generate GitHub stats and top-language SVG cards")]
struct Args {
    /// GitHub username (overrides GITHUB_USERNAME)
    #[arg(short, long)]
    username: Option<String>,

    /// Access token (overrides GITHUB_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// Directory the cards are written to (overrides OUTPUT_DIR)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// API root (overrides GITHUB_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Languages shown on the languages card (overrides MAX_LANGUAGES)
    #[arg(long)]
    max_languages: Option<usize>,

    /// Print a JSON summary of the collected stats to stdout
    #[arg(long)]
    summary: bool,
}

impl Args {
    fn apply(self, mut config: Config) -> Config {
        if let Some(username) = self.username {
            config.username = username;
        }
        if let Some(token) = self.token.filter(|t| !t.is_empty()) {
            config.github_token = Some(token);
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(url) = self.api_url {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(max) = self.max_languages {
            config.max_languages = max;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("ghstats=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let print_summary = args.summary;
    let config = args.apply(Config::from_env()?);

    if config.github_token.is_none() {
        tracing::warn!("No GITHUB_TOKEN set, using unauthenticated rate limits");
    }

    let github = GitHubClient::from_config(&config)?;
    let pipeline = StatsPipeline::new(github, PipelineConfig::from(&config));

    tracing::info!("Fetching stats for {}...", config.username);
    let output = pipeline.run().await?;

    if print_summary {
        println!("{}", serde_json::to_string_pretty(&output.summary)?);
    }

    tracing::info!("Done!");
    Ok(())
}
