use std::sync::Arc;

use crate::catalog::{JobCatalog, ProfileReader};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn JobCatalog>,
    pub profiles: Arc<dyn ProfileReader>,
    pub config: Config,
}
