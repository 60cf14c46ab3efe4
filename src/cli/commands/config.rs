//! Config command - show current configuration

use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print the configuration as TOML (ready to save as a config file)
    #[arg(long)]
    pub toml: bool,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = services.config.as_ref();

    if args.toml {
        print!("{}", toml::to_string_pretty(config)?);
        return Ok(());
    }

    match format {
        OutputFormat::Human => {
            output::print_header("Configuration:");
            println!("  server:");
            println!("    listen: {}", config.listen_addr());
            println!("  corpus:");
            println!("    path: {}", config.corpus.path.display());
            println!("  query:");
            println!("    default_top: {}", config.query.default_top);
            println!("  logging:");
            println!("    format: {:?}", config.logging.format);
        }
        OutputFormat::Json => output::print_json(config)?,
    }

    Ok(())
}
