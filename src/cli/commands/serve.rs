//! Serve command - run the HTTP server

use crate::core::config::Config;
use crate::core::services::Services;
use crate::http;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Corpus file to index
    #[arg(long, short = 'c')]
    pub corpus: Option<PathBuf>,
}

impl ServeArgs {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(corpus) = &self.corpus {
            config.corpus.path = corpus.clone();
        }
    }
}

/// Execute the serve command
///
/// Starts the index build in the background and serves requests
/// right away; queries return empty results until the build
/// publishes.
pub async fn execute(services: &Arc<Services>) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting autocomplete service");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    services.config.log_config();

    // Lazy load the index; the JoinHandle is not awaited
    let _build = services.spawn_index_build();

    let app = http::router(Arc::clone(services));

    let addr = services.config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Autocomplete at http://{}/autocomplete?term=", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
