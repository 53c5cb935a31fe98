use anyhow::Result;
use database_layer::{DatabaseConfig, DatabasePool, QueryExecutor};

use crate::config::{database_config_from_env, ServerConfig};

/// Main OncoForms server state
#[derive(Clone)]
pub struct OncoformsServer {
    /// Server configuration
    pub config: ServerConfig,
    /// Database connection pool
    pub db: DatabasePool,
}

impl OncoformsServer {
    /// Create a new server instance from the environment
    pub fn new() -> Result<Self> {
        let config = ServerConfig::from_env();
        let db_config = database_config_from_env();
        Self::with_config(config, &db_config)
    }

    /// Create a new server instance with explicit configuration
    /// This is useful for testing
    pub fn with_config(config: ServerConfig, db_config: &DatabaseConfig) -> Result<Self> {
        let db = DatabasePool::connect_lazy(db_config)?;
        Ok(Self { config, db })
    }

    /// Statement executor over the shared pool
    pub fn executor(&self) -> QueryExecutor {
        QueryExecutor::new(self.db.clone())
    }
}

impl std::fmt::Debug for OncoformsServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OncoformsServer")
            .field("config", &self.config)
            .finish()
    }
}
