use std::sync::Arc;

use crate::{
    config::Config,
    services::{CourseCatalog, FilterMode, MAX_RECOMMENDATIONS},
};

/// Shared application state
///
/// Everything here is read-only after startup, so handlers share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CourseCatalog>,
    pub filter_mode: FilterMode,
    pub recommendation_limit: usize,
}

impl AppState {
    /// Creates state around an already-loaded catalog with default settings
    pub fn new(catalog: CourseCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            filter_mode: FilterMode::default(),
            recommendation_limit: MAX_RECOMMENDATIONS,
        }
    }

    /// Creates state using the filter mode and limit from configuration
    pub fn from_config(catalog: CourseCatalog, config: &Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            filter_mode: config.filter_mode,
            recommendation_limit: config.recommendation_limit,
        }
    }

    pub fn with_filter_mode(mut self, filter_mode: FilterMode) -> Self {
        self.filter_mode = filter_mode;
        self
    }
}
