use std::sync::Arc;

use crate::document::session::SessionStore;
use crate::suggestions::SuggestionSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Every live editing session, one document each.
    pub sessions: SessionStore,
    /// Pluggable suggestion source. Default: StaticSuggestionSource.
    pub suggestions: Arc<dyn SuggestionSource>,
}
