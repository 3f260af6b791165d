use std::sync::Arc;

use crmhub_config::{CorsConfig, DatabaseConfig, JwtConfig};
use crmhub_db::{DocumentStore, MongoStore, StoreError};

/// Shared, immutable state handed to every handler.
///
/// `store` is the single storage client for the whole process: acquired once
/// in [`init_app_state`] and released by [`AppState::shutdown`].
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub async fn shutdown(&self) {
        self.store.shutdown().await;
    }
}

pub async fn init_app_state(database_config: &DatabaseConfig) -> Result<AppState, StoreError> {
    let store = MongoStore::connect(database_config).await?;

    Ok(AppState {
        store: Arc::new(store),
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    })
}
