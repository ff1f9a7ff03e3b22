//! Connection configuration
//!
//! Resolution order (lowest to highest priority):
//! 1. Built-in defaults (the local development database)
//! 2. ~/.lightbnb/config.toml
//! 3. ./lightbnb.toml
//! 4. LIGHTBNB_DB_* environment variables
//! 5. DATABASE_URL, which replaces the discrete fields entirely

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;
use tracing::{debug, warn};

use crate::error::{DbError, Result};
use crate::pool::DEFAULT_MAX_CONNECTIONS;

/// PostgreSQL connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub max_connections: u32,
    /// Full connection string; takes precedence over the discrete fields
    pub url: Option<String>,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            user: "vagrant".to_string(),
            password: "123".to_string(),
            host: "localhost".to_string(),
            port: 5432,
            database: "lightbnb".to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            url: None,
        }
    }
}

/// Settings from one config file; unset keys leave lower layers alone
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DbConfigLayer {
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
    pub max_connections: Option<u32>,
    pub url: Option<String>,
}

impl DbConfigLayer {
    /// Parse a TOML document with a `[database]` table.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str::<ConfigFile>(contents)
            .map(|file| file.database)
            .map_err(|e| DbError::config(e.to_string()))
    }

    fn read_file(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!("Failed to read {}: {}", path.display(), e);
                return None;
            }
        };
        match Self::from_toml_str(&contents) {
            Ok(layer) => {
                debug!("Loaded config from {}", path.display());
                Some(layer)
            }
            Err(e) => {
                warn!("Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// On-disk layout: settings live under a `[database]` table
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    database: DbConfigLayer,
}

impl DbConfig {
    /// Load from config files and the process environment.
    pub fn load() -> Self {
        let candidates: Vec<PathBuf> = [
            config_dir().map(|d| d.join("config.toml")),
            Some(PathBuf::from("lightbnb.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::default()
            .merge_files(&candidates)
            .apply_env(|key| std::env::var(key).ok())
    }

    /// Overlay each readable file in order; later files win per key.
    pub fn merge_files(self, paths: &[PathBuf]) -> Self {
        paths
            .iter()
            .filter_map(|path| DbConfigLayer::read_file(path))
            .fold(self, Self::merge)
    }

    /// Overlay the keys a layer sets (right overrides left).
    pub fn merge(mut self, layer: DbConfigLayer) -> Self {
        if let Some(user) = layer.user {
            self.user = user;
        }
        if let Some(password) = layer.password {
            self.password = password;
        }
        if let Some(host) = layer.host {
            self.host = host;
        }
        if let Some(port) = layer.port {
            self.port = port;
        }
        if let Some(database) = layer.database {
            self.database = database;
        }
        if let Some(max) = layer.max_connections {
            self.max_connections = max;
        }
        if layer.url.is_some() {
            self.url = layer.url;
        }
        self
    }

    /// Parse a single TOML document over the built-in defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        DbConfigLayer::from_toml_str(contents).map(|layer| Self::default().merge(layer))
    }

    /// Overlay environment variables, read through `lookup`.
    pub fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(user) = lookup("LIGHTBNB_DB_USER") {
            self.user = user;
        }
        if let Some(password) = lookup("LIGHTBNB_DB_PASSWORD") {
            self.password = password;
        }
        if let Some(host) = lookup("LIGHTBNB_DB_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("LIGHTBNB_DB_PORT") {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(_) => warn!("Ignoring invalid LIGHTBNB_DB_PORT: {}", port),
            }
        }
        if let Some(database) = lookup("LIGHTBNB_DB_NAME") {
            self.database = database;
        }
        if let Some(max) = lookup("LIGHTBNB_DB_MAX_CONNECTIONS") {
            match max.parse() {
                Ok(max) => self.max_connections = max,
                Err(_) => warn!("Ignoring invalid LIGHTBNB_DB_MAX_CONNECTIONS: {}", max),
            }
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.url = Some(url);
        }
        self
    }

    /// Build sqlx connect options.
    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url)
                .map_err(|e| DbError::config(format!("invalid DATABASE_URL: {}", e)));
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database))
    }

    /// `user@host:port/database`, never including the password.
    pub fn describe(&self) -> String {
        match &self.url {
            Some(_) => "DATABASE_URL".to_string(),
            None => format!(
                "{}@{}:{}/{}",
                self.user, self.host, self.port, self.database
            ),
        }
    }
}

/// Get the lightbnb config directory path (~/.lightbnb)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".lightbnb"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_local_database() {
        let config = DbConfig::default();
        assert_eq!(config.describe(), "vagrant@localhost:5432/lightbnb");
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = DbConfig::from_toml_str(
            r#"
            [database]
            host = "db.internal"
            port = 6543
            "#,
        )
        .unwrap();
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 6543);
        assert_eq!(config.user, "vagrant");
        assert_eq!(config.database, "lightbnb");
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(DbConfig::from_toml_str("").unwrap(), DbConfig::default());
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = DbConfig::from_toml_str("[database\nhost = 1").unwrap_err();
        assert!(matches!(err, DbError::Config { .. }));
    }

    #[test]
    fn env_overrides_fields() {
        let config = DbConfig::default().apply_env(env(&[
            ("LIGHTBNB_DB_USER", "app"),
            ("LIGHTBNB_DB_NAME", "lightbnb_test"),
            ("LIGHTBNB_DB_PORT", "5433"),
        ]));
        assert_eq!(config.describe(), "app@localhost:5433/lightbnb_test");
    }

    #[test]
    fn invalid_port_is_ignored() {
        let config = DbConfig::default().apply_env(env(&[("LIGHTBNB_DB_PORT", "nope")]));
        assert_eq!(config.port, 5432);
    }

    #[test]
    fn database_url_wins() {
        let config = DbConfig::default().apply_env(env(&[(
            "DATABASE_URL",
            "postgres://app:pw@db:5432/other",
        )]));
        assert_eq!(config.describe(), "DATABASE_URL");
        let options = config.connect_options().unwrap();
        assert_eq!(options.get_host(), "db");
        assert_eq!(options.get_database(), Some("other"));
    }

    #[test]
    fn discrete_fields_build_options() {
        let options = DbConfig::default().connect_options().unwrap();
        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_username(), "vagrant");
        assert_eq!(options.get_database(), Some("lightbnb"));
    }

    #[test]
    fn reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lightbnb.toml");
        std::fs::write(&path, "[database]\nuser = \"owner\"\n").unwrap();

        let layer = DbConfigLayer::read_file(&path).unwrap();
        assert_eq!(layer.user.as_deref(), Some("owner"));
        assert_eq!(layer.host, None);

        assert!(DbConfigLayer::read_file(&dir.path().join("missing.toml")).is_none());
    }

    #[test]
    fn local_file_layers_over_global_file() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("config.toml");
        let local = dir.path().join("lightbnb.toml");
        std::fs::write(
            &global,
            "[database]\nuser = \"globaluser\"\ndatabase = \"globaldb\"\nhost = \"global.internal\"\n",
        )
        .unwrap();
        std::fs::write(&local, "[database]\nhost = \"localhost2\"\n").unwrap();

        let config = DbConfig::default().merge_files(&[global, local]);

        assert_eq!(config.user, "globaluser");
        assert_eq!(config.database, "globaldb");
        assert_eq!(config.host, "localhost2");
        assert_eq!(config.port, 5432);
    }

    #[test]
    fn unparseable_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("config.toml");
        let local = dir.path().join("lightbnb.toml");
        std::fs::write(&global, "[database]\nuser = \"globaluser\"\n").unwrap();
        std::fs::write(&local, "[database\nhost = ").unwrap();

        let config = DbConfig::default().merge_files(&[global, local]);
        assert_eq!(config.user, "globaluser");
        assert_eq!(config.host, "localhost");
    }
}
