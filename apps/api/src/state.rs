use crate::profile::ProfileGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub generator: ProfileGenerator,
}
