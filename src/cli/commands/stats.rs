//! Stats command - build the index and report on it

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::index::IndexStats;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the stats command
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Corpus file to index
    #[arg(long, short = 'c')]
    pub corpus: Option<PathBuf>,
}

impl StatsArgs {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(corpus) = &self.corpus {
            config.corpus.path = corpus.clone();
        }
    }
}

/// Stats response
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub corpus: String,
    #[serde(flatten)]
    pub stats: IndexStats,
}

/// Execute the stats command
pub async fn execute(
    _args: StatsArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let index = services.build_index_now()?;

    let response = StatsResponse {
        corpus: services.config.corpus.path.display().to_string(),
        stats: index.stats().clone(),
    };

    match format {
        OutputFormat::Human => {
            let stats = &response.stats;
            output::print_header("Index statistics:");
            println!("  Corpus: {}", colors::file_path(&response.corpus));
            println!(
                "  Tokens scanned: {}",
                colors::number(&output::format_count(stats.tokens_scanned))
            );
            println!(
                "  Words accepted: {}",
                colors::number(&output::format_count(stats.words_accepted))
            );
            println!(
                "  Tokens rejected: {}",
                colors::number(&output::format_count(stats.tokens_rejected()))
            );
            println!(
                "  Distinct words: {}",
                colors::number(&output::format_count(stats.distinct_words as u64))
            );
            println!(
                "  Build time: {}",
                colors::number(&output::format_duration(stats.duration_ms as f64 / 1000.0))
            );
        }
        OutputFormat::Json => output::print_json(&response)?,
    }

    Ok(())
}
