use std::sync::Arc;

use greenhouse_core::{seed, CatalogService, CatalogStore, GreenhouseConfig};

/// Application state shared by every handler
pub struct AppState {
    pub service: CatalogService,
    pub config: GreenhouseConfig,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    /// State backed by the demo garden
    pub fn new(config: GreenhouseConfig) -> SharedState {
        let store = seed::demo_store(config.submission_week.clone());
        Self::with_store(config, store)
    }

    /// State backed by a caller-built store (tests inject deterministic growth here)
    pub fn with_store(config: GreenhouseConfig, store: CatalogStore) -> SharedState {
        let service = CatalogService::new(store, config.current_week.clone());
        Arc::new(Self { service, config })
    }
}
