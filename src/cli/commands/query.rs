//! Query command - complete a prefix from the command line

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::search::resolve_limit;
use crate::core::services::Services;
use crate::core::types::{Completion, CompletionResponse};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the query command
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Prefix to complete (case-sensitive; "" lists the most frequent words)
    pub term: String,

    /// Maximum number of results (defaults to the configured top)
    #[arg(long, short = 'n', allow_hyphen_values = true)]
    pub top: Option<String>,

    /// Corpus file to index
    #[arg(long, short = 'c')]
    pub corpus: Option<PathBuf>,

    /// Show occurrence counts next to each word
    #[arg(long)]
    pub counts: bool,
}

impl QueryArgs {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(corpus) = &self.corpus {
            config.corpus.path = corpus.clone();
        }
    }
}

/// Build the completion response for `args`
pub fn complete(args: &QueryArgs, services: &Services) -> CompletionResponse {
    let limit = resolve_limit(args.top.as_deref(), services.autocomplete.default_top());
    let results: Vec<Completion> = services
        .autocomplete
        .ranked(&args.term, limit)
        .into_iter()
        .enumerate()
        .map(|(i, entry)| Completion {
            rank: i + 1,
            word: entry.word.clone(),
            count: entry.count,
        })
        .collect();

    CompletionResponse {
        term: args.term.clone(),
        limit,
        count: results.len(),
        results,
    }
}

/// Execute the query command
pub async fn execute(
    args: QueryArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    services.build_index_now()?;

    let response = complete(&args, services);

    match format {
        OutputFormat::Human => {
            if response.results.is_empty() {
                eprintln!(
                    "No words start with '{}'",
                    colors::label(&response.term)
                );
            }
            for result in &response.results {
                if args.counts {
                    println!(
                        "{} {} {}",
                        colors::rank(&format!("{:>3}.", result.rank)),
                        colors::word(&result.word),
                        colors::dim(&format!("({})", output::format_count(result.count)))
                    );
                } else {
                    println!("{}", result.word);
                }
            }
        }
        OutputFormat::Json => output::print_json(&response)?,
    }

    Ok(())
}
