use std::sync::Arc;

use crate::roadmap::generator::RoadmapGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Roadmap generator with its owned cache. One instance per process —
    /// the cache lives exactly as long as the state does.
    pub generator: Arc<RoadmapGenerator>,
}
