use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::AppConfig;
use crate::queries::AnalyticsQueries;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub queries: Arc<AnalyticsQueries>,
}

impl AppState {
    /// Build the state, wrapping every analytic query in a cache that
    /// expires after `config.cache.ttl_secs`.
    pub fn new(db: &DatabaseConnection, config: AppConfig) -> Self {
        let queries = AnalyticsQueries::new(db, config.cache.ttl());
        Self {
            config,
            queries: Arc::new(queries),
        }
    }
}
