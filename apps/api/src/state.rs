use std::sync::Arc;

use crate::gateway::ModelGateway;

/// Shared application state injected into all route handlers via Axum extractors.
/// The gateway is a trait object so tests can swap in a canned double.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn ModelGateway>,
}
