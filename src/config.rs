//! Configuration management for Bookshelf server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Driver identifier used when none is configured
pub const DEFAULT_DRIVER_CLASS_NAME: &str = "org.postgresql.Driver";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Connection pool settings and the configured datasource URL property
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Explicit connection URL, may still hold `${...}` placeholders
    pub url: Option<String>,
    pub driver_class_name: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Datasource variables as seen through the configuration layers.
///
/// Each key is overridden by the environment variable of the same name
/// in upper case (`DB_URL`, `JDBC_DATABASE_URL`, ...).
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DatasourceProperties {
    pub db_url: Option<String>,
    pub db_user: Option<String>,
    pub db_password: Option<String>,
    pub jdbc_database_url: Option<String>,
    pub jdbc_database_username: Option<String>,
    pub jdbc_database_password: Option<String>,
    pub database_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub datasource: DatasourceProperties,
    pub logging: LoggingConfig,
}

/// Variables copied verbatim into the `datasource` table
const DATASOURCE_VARIABLES: [&str; 7] = [
    "DB_URL",
    "DB_USER",
    "DB_PASSWORD",
    "JDBC_DATABASE_URL",
    "JDBC_DATABASE_USERNAME",
    "JDBC_DATABASE_PASSWORD",
    "DATABASE_URL",
];

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix BOOKSHELF__)
            .add_source(
                Environment::with_prefix("BOOKSHELF")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", env::var("DATASOURCE_URL").ok())?
            .set_override_option(
                "database.driver_class_name",
                env::var("DATASOURCE_DRIVER_CLASS_NAME").ok(),
            )?;

        for name in DATASOURCE_VARIABLES {
            builder = builder.set_override_option(
                format!("datasource.{}", name.to_lowercase()),
                env::var(name).ok(),
            )?;
        }

        builder.build()?.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            driver_class_name: DEFAULT_DRIVER_CLASS_NAME.to_string(),
            max_connections: 10,
            min_connections: 1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
