//! Shared application state.

use std::sync::Arc;

use crate::application::services::ResolutionService;
use crate::domain::entities::RedirectTable;

/// State injected into every handler.
///
/// Holds only read-only data, so clones are shared across requests
/// without locking.
#[derive(Clone)]
pub struct AppState {
    pub resolution_service: Arc<ResolutionService>,
}

impl AppState {
    pub fn new(table: Arc<RedirectTable>) -> Self {
        Self {
            resolution_service: Arc::new(ResolutionService::new(table)),
        }
    }
}
