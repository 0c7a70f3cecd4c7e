//! Hand-off point between background tasks and the UI thread.
//!
//! A spawned task writes its result into `AsyncState` and requests a repaint;
//! the next `update()` takes everything out in one lock and feeds it to the
//! controller.

use super::Completion;
use crate::client::ModelCatalog;
use crate::error::PredictionError;

#[derive(Debug, Default)]
pub struct AsyncState {
    pub pending_prediction: Option<Completion>,
    pub pending_catalog: Option<Result<ModelCatalog, PredictionError>>,
    pub loading_catalog: bool,
}

/// Results taken out of [`AsyncState`] so they can be processed without
/// holding the lock
#[derive(Debug, Default)]
pub struct PendingResults {
    pub prediction: Option<Completion>,
    pub catalog: Option<Result<ModelCatalog, PredictionError>>,
}

impl PendingResults {
    pub fn is_empty(&self) -> bool {
        self.prediction.is_none() && self.catalog.is_none()
    }
}

impl AsyncState {
    pub fn extract_pending(&mut self) -> PendingResults {
        PendingResults {
            prediction: self.pending_prediction.take(),
            catalog: self.pending_catalog.take(),
        }
    }
}
