use std::sync::Arc;

use bank::{Catalog, load_catalog};

use super::config::Config;

/// Shared by every handler. Nothing here changes after startup.
pub struct AppState {
    pub catalog: Catalog,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        let catalog = load_catalog(&config.catalog_path);

        Self::with_catalog(config, catalog)
    }

    pub fn with_catalog(config: Config, catalog: Catalog) -> Arc<Self> {
        Arc::new(Self { catalog, config })
    }
}
