//! Unified service container for the autocomplete service
//!
//! Provides shared access to all core services and owns the index
//! handle. Nothing here is global: adapters receive the container at
//! construction time.

use crate::core::config::Config;
use crate::core::error::{AutocompleteError, Result};
use crate::core::index::{build_from_file, FrequencyIndex, IndexHandle};
use crate::core::search::AutocompleteService;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Shared frequency index, empty until the build publishes it
    pub index: Arc<IndexHandle>,

    /// Prefix autocomplete over `index`
    pub autocomplete: Arc<AutocompleteService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        let index = Arc::new(IndexHandle::new());

        let autocomplete = Arc::new(AutocompleteService::new(
            Arc::clone(&index),
            config.query.default_top,
        ));

        Self {
            index,
            autocomplete,
            config: Arc::new(config),
        }
    }

    /// Build the index on a blocking thread and publish it.
    ///
    /// Returns immediately. A failed read or a panic inside the build
    /// is recorded on the handle and the process keeps serving empty
    /// results.
    pub fn spawn_index_build(&self) -> JoinHandle<()> {
        let handle = Arc::clone(&self.index);
        let path = self.config.corpus.path.clone();

        tokio::spawn(async move {
            let built = tokio::task::spawn_blocking(move || build_from_file(&path)).await;

            let outcome = match built {
                Ok(Ok(index)) => handle.publish(index).map(|_| ()),
                Ok(Err(e)) => handle.record_failure(e),
                Err(join_err) => handle.record_failure(AutocompleteError::IndexingFailed(
                    format!("build task aborted: {join_err}"),
                )),
            };

            if let Err(e) = outcome {
                tracing::warn!(error = %e, "Index build finished after handle was finalized");
            }
        })
    }

    /// Build and publish the index on the current thread.
    ///
    /// Used by the one-shot CLI commands. Failures are recorded on the
    /// handle as well as returned.
    pub fn build_index_now(&self) -> Result<&FrequencyIndex> {
        match build_from_file(&self.config.corpus.path) {
            Ok(index) => self.index.publish(index),
            Err(e) => {
                let message = e.message();
                self.index.record_failure(e)?;
                Err(AutocompleteError::IndexingFailed(message))
            }
        }
    }
}
