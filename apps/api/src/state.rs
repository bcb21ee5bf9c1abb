use std::sync::Arc;

use crate::story::teller::Storyteller;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable story backend. Default: TemplateStoryteller.
    pub storyteller: Arc<dyn Storyteller>,
}
