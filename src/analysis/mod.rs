pub mod aggregator;
pub mod pipeline;

pub use aggregator::{aggregate_languages, aggregate_repo_stats, ExclusionPolicy};
pub use pipeline::{RunOutput, StatsPipeline};
