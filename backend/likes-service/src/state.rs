//! Shared application state.

use std::sync::Arc;

use crate::config::Config;
use crate::store::LikeStore;

/// State shared across all workers.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn LikeStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn LikeStore>) -> Self {
        Self { config, store }
    }
}
