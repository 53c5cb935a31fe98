//! Server configuration loaded from the environment at startup

use database_layer::DatabaseConfig;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server name
    pub name: String,
    /// TCP port to bind
    pub port: u16,
    /// Maximum accepted request body size in bytes
    pub max_body_bytes: usize,
    /// Directory served for static assets
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "OncoForms Server".to_string(),
            port: 3000,
            max_body_bytes: 50 * 1024 * 1024,
            static_dir: ".".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            name: defaults.name,
            port: env_parsed("SERVER_PORT").unwrap_or(defaults.port),
            max_body_bytes: env_parsed("MAX_BODY_BYTES").unwrap_or(defaults.max_body_bytes),
            static_dir: std::env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
        }
    }
}

/// Load database configuration from the environment, falling back to defaults.
///
/// `DATABASE_URL` takes precedence over the individual fields.
pub fn database_config_from_env() -> DatabaseConfig {
    let defaults = DatabaseConfig::default();
    DatabaseConfig {
        host: std::env::var("DATABASE_HOST").unwrap_or(defaults.host),
        port: env_parsed("DATABASE_PORT").unwrap_or(defaults.port),
        database: std::env::var("DATABASE_NAME").unwrap_or(defaults.database),
        username: std::env::var("DATABASE_USER").unwrap_or(defaults.username),
        password: std::env::var("DATABASE_PASSWORD").unwrap_or(defaults.password),
        encrypt: env_parsed("DATABASE_ENCRYPT").unwrap_or(defaults.encrypt),
        trust_server_certificate: env_parsed("DATABASE_TRUST_CERTIFICATE")
            .unwrap_or(defaults.trust_server_certificate),
        connection_timeout: env_parsed("DATABASE_CONNECT_TIMEOUT_SECS")
            .map(Duration::from_secs)
            .unwrap_or(defaults.connection_timeout),
        request_timeout: env_parsed("DATABASE_REQUEST_TIMEOUT_SECS")
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout),
        max_connections: env_parsed("DATABASE_MAX_CONNECTIONS").unwrap_or(defaults.max_connections),
        url: std::env::var("DATABASE_URL").ok(),
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|value| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_public_contract() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_body_bytes, 50 * 1024 * 1024);
        assert_eq!(config.static_dir, ".");
    }

    #[test]
    fn env_parsed_ignores_unset_variables() {
        let port: Option<u16> = env_parsed("ONCOFORMS_TEST_UNSET_VARIABLE");
        assert!(port.is_none());
    }

    #[test]
    fn env_parsed_ignores_garbage_values() {
        std::env::set_var("ONCOFORMS_TEST_GARBAGE_PORT", "not-a-number");
        let port: Option<u16> = env_parsed("ONCOFORMS_TEST_GARBAGE_PORT");
        assert!(port.is_none());
        std::env::remove_var("ONCOFORMS_TEST_GARBAGE_PORT");
    }

    #[test]
    fn env_parsed_reads_set_variables() {
        std::env::set_var("ONCOFORMS_TEST_VALID_PORT", "8080");
        let port: Option<u16> = env_parsed("ONCOFORMS_TEST_VALID_PORT");
        assert_eq!(port, Some(8080));
        std::env::remove_var("ONCOFORMS_TEST_VALID_PORT");
    }
}
