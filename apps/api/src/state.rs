use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::stats::store::ApplicationStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Store seam for the time-series aggregator. Production uses
    /// `PgApplicationStore`; tests substitute an in-memory store.
    pub store: Arc<dyn ApplicationStore>,
}
