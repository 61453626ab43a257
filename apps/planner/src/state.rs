use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only; every request computes its own plan.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
