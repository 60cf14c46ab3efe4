//! Autocomplete CLI and server entry point
//!
//! # Examples
//!
//! ```bash
//! # Serve GET /autocomplete on :9000, indexing the corpus in the background
//! autocomplete serve --corpus shakespeare-complete.txt
//!
//! # One-off query
//! autocomplete query th --top 10 --counts
//!
//! # Corpus statistics
//! autocomplete stats
//! ```

use autocomplete::cli::{output, run, Cli};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
