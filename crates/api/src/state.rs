use std::sync::Arc;

use crate::auth::jwt::JwtConfig;
use crate::config::ServerConfig;

/// Handler state: the member store and the loaded configuration.
#[derive(Clone)]
pub struct AppState {
    pub pool: famtree_db::DbPool,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(pool: famtree_db::DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }

    /// Token settings used by the auth extractors and the auth handlers.
    pub fn jwt(&self) -> &JwtConfig {
        &self.config.jwt
    }
}
