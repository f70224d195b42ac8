use std::sync::Arc;

use crate::config::AppConfig;
use crate::content::ArticleStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Store handle over the configured content directory.
    /// Cheap to construct; every query reads fresh from disk.
    pub fn store(&self) -> ArticleStore {
        ArticleStore::new(&self.config.content_dir)
    }
}
