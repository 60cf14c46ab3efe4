//! One-shot publication of the frequency index.
//!
//! The handle starts empty. The build task finishes it exactly once,
//! either by publishing a complete index or by recording why the
//! build failed. Both outcomes are permanent. Readers never block
//! and never see anything between "nothing yet" and the final index.

use crate::core::error::{AutocompleteError, Result};
use crate::core::index::frequency::FrequencyIndex;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// Lifecycle state of the shared index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexStatus {
    Building,
    Ready,
    Failed,
}

enum Outcome {
    Published(FrequencyIndex),
    Failed(AutocompleteError),
}

/// Shared handle to the index, passed to everything that queries it.
#[derive(Default)]
pub struct IndexHandle {
    outcome: OnceCell<Outcome>,
}

impl IndexHandle {
    /// Create a handle in the `Building` state
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a fully built index visible to readers.
    ///
    /// # Errors
    ///
    /// - `AlreadyFinalized`: an index was already published or a
    ///   failure was already recorded
    pub fn publish(&self, index: FrequencyIndex) -> Result<&FrequencyIndex> {
        let words = index.len();
        self.outcome
            .set(Outcome::Published(index))
            .map_err(|_| AutocompleteError::AlreadyFinalized)?;

        tracing::info!(words, "Frequency index published");
        self.get().ok_or(AutocompleteError::AlreadyFinalized)
    }

    /// Record a build failure; the index stays unpublished for good.
    ///
    /// # Errors
    ///
    /// - `AlreadyFinalized`: the handle already reached a final state
    pub fn record_failure(&self, error: AutocompleteError) -> Result<()> {
        tracing::error!(error = %error, "Frequency index build failed");
        self.outcome
            .set(Outcome::Failed(error))
            .map_err(|_| AutocompleteError::AlreadyFinalized)
    }

    /// The published index, or `None` while building or after failure
    pub fn get(&self) -> Option<&FrequencyIndex> {
        match self.outcome.get() {
            Some(Outcome::Published(index)) => Some(index),
            _ => None,
        }
    }

    /// The recorded build error, if the build failed
    pub fn failure(&self) -> Option<&AutocompleteError> {
        match self.outcome.get() {
            Some(Outcome::Failed(error)) => Some(error),
            _ => None,
        }
    }

    pub fn status(&self) -> IndexStatus {
        match self.outcome.get() {
            None => IndexStatus::Building,
            Some(Outcome::Published(_)) => IndexStatus::Ready,
            Some(Outcome::Failed(_)) => IndexStatus::Failed,
        }
    }
}
