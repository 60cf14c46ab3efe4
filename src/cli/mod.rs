//! CLI adapter for the autocomplete service
//!
//! Runs the HTTP server or answers one-off queries against a corpus.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      http/       |<-----|      cli/        |
//! | (axum adapter)   |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use crate::core::config::{Config, LogFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Autocomplete - word frequency prefix completion
///
/// Counts every word of a text corpus and returns the most frequent
/// words starting with a given prefix.
#[derive(Parser, Debug)]
#[command(name = "autocomplete")]
#[command(version)]
#[command(about = "Prefix autocomplete ranked by corpus frequency", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Configuration file (overrides AUTOCOMPLETE_CONFIG and XDG lookup)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server; the index builds in the background
    Serve(commands::ServeArgs),

    /// Build the index and print completions for a prefix
    Query(commands::QueryArgs),

    /// Build the index and print corpus statistics
    Stats(commands::StatsArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  autocomplete completions bash > ~/.local/share/bash-completion/completions/autocomplete
    ///   zsh:   autocomplete completions zsh > ~/.zfunc/_autocomplete
    ///   fish:  autocomplete completions fish > ~/.config/fish/completions/autocomplete.fish
    Completions(commands::CompletionsArgs),
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `default_directives`. Calling this twice is
/// harmless; the second subscriber is dropped.
pub fn init_tracing(format: LogFormat, default_directives: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    if let Err(e) = result {
        output::print_warning(&format!("Logging already initialized: {e}"));
    }
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Load configuration, then apply per-command overrides
    let mut config = Config::load_from(cli.config.as_deref())?;
    match &cli.command {
        Commands::Serve(args) => args.apply(&mut config),
        Commands::Query(args) => args.apply(&mut config),
        Commands::Stats(args) => args.apply(&mut config),
        Commands::ShowConfig(_) | Commands::Completions(_) => {}
    }
    config.validate()?;

    let directives = match cli.command {
        Commands::Serve(_) => "autocomplete=info,tower_http=debug",
        _ => "autocomplete=warn",
    };
    init_tracing(config.logging.format, directives);

    // Create services
    let services = Arc::new(Services::new(config));

    // Execute command
    match cli.command {
        Commands::Serve(_) => commands::serve::execute(&services).await,
        Commands::Query(args) => commands::query::execute(args, &services, cli.format).await,
        Commands::Stats(args) => commands::stats::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
