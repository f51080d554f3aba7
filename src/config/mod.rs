use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Which catalog implementation backs the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "pg" => Ok(StorageBackend::Postgres),
            "memory" | "mem" => Ok(StorageBackend::Memory),
            other => Err(format!("unknown storage backend: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// JSON fixture used to seed the memory backend
    pub fixture: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
    pub connection_timeout: u64,
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_overrides(|key| env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        // Server overrides
        if let Some(v) = lookup("RENTAL_API_HOST") {
            self.server.host = v;
        }
        if let Some(v) = lookup("RENTAL_API_PORT").or_else(|| lookup("PORT")) {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }

        // Storage overrides
        if let Some(v) = lookup("STORAGE_BACKEND") {
            match v.parse() {
                Ok(backend) => self.storage.backend = backend,
                Err(e) => tracing::warn!("Ignoring STORAGE_BACKEND: {}", e),
            }
        }
        if let Some(v) = lookup("STORAGE_FIXTURE") {
            self.storage.fixture = Some(PathBuf::from(v));
        }

        // Database overrides
        if let Some(v) = lookup("DATABASE_URL") {
            self.database.url = Some(v);
        }
        if let Some(v) = lookup("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Some(v) = lookup("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = v.parse().unwrap_or(self.database.connection_timeout);
        }
        if let Some(v) = lookup("DATABASE_RUN_MIGRATIONS") {
            self.database.run_migrations = v.parse().unwrap_or(self.database.run_migrations);
        }

        // Security overrides
        if let Some(v) = lookup("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Some(v) = lookup("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            storage: StorageConfig {
                backend: StorageBackend::Memory,
                fixture: None,
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 10,
                connection_timeout: 30,
                run_migrations: true,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec![],
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            storage: StorageConfig {
                backend: StorageBackend::Postgres,
                fixture: None,
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 20,
                connection_timeout: 10,
                run_migrations: true,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://staging.example.com".to_string()],
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            storage: StorageConfig {
                backend: StorageBackend::Postgres,
                fixture: None,
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 50,
                connection_timeout: 5,
                run_migrations: false,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://app.example.com".to_string()],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::development();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.server.port, 3000);
        assert!(config.database.run_migrations);
    }

    #[test]
    fn test_default_production_config() {
        let config = AppConfig::production();
        assert_eq!(config.storage.backend, StorageBackend::Postgres);
        assert!(!config.database.run_migrations);
        assert_eq!(config.database.max_connections, 50);
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let config = AppConfig::development().with_overrides(lookup_from(&[
            ("PORT", "4100"),
            ("STORAGE_BACKEND", "postgres"),
            ("DATABASE_URL", "postgres://localhost/rental"),
            ("SECURITY_CORS_ORIGINS", "http://a.test, http://b.test,"),
        ]));

        assert_eq!(config.server.port, 4100);
        assert_eq!(config.storage.backend, StorageBackend::Postgres);
        assert_eq!(config.database.url.as_deref(), Some("postgres://localhost/rental"));
        assert_eq!(config.security.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_specific_port_wins_over_generic() {
        let config = AppConfig::development()
            .with_overrides(lookup_from(&[("RENTAL_API_PORT", "5000"), ("PORT", "6000")]));
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = AppConfig::staging().with_overrides(lookup_from(&[
            ("DATABASE_MAX_CONNECTIONS", "lots"),
            ("STORAGE_BACKEND", "floppy"),
        ]));
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.storage.backend, StorageBackend::Postgres);
    }
}
