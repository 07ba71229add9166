//! # Configuration
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable | Default |
//! |---|---|
//! | `FORGE_DB_PATH` | platform data dir + `forge.db` (`:memory:` allowed) |
//! | `FORGE_DB_MAX_CONNECTIONS` | `5` |
//! | `FORGE_LOG`, then `RUST_LOG` | `info,forge=debug,sqlx=warn` |
//! | `FORGE_SEED` | `false` |

use directories::ProjectDirs;
use serde::Serialize;
use std::env;
use std::path::PathBuf;

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "info,forge=debug,sqlx=warn";

/// Database file name inside the platform data directory.
pub const DB_FILE_NAME: &str = "forge.db";

/// Admin application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminConfig {
    /// SQLite database file, or `:memory:`
    pub db_path: PathBuf,

    /// Connection pool size
    pub db_max_connections: u32,

    /// tracing-subscriber filter directive
    pub log_filter: String,

    /// Seed demo data at startup when the database is empty
    pub seed: bool,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = match lookup("FORGE_DB_PATH").filter(|p| !p.trim().is_empty()) {
            Some(path) => PathBuf::from(path),
            None => default_db_path()?,
        };

        let db_max_connections: u32 = lookup("FORGE_DB_MAX_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue("FORGE_DB_MAX_CONNECTIONS".to_string()))?;
        if db_max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "FORGE_DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        let log_filter = lookup("FORGE_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let seed = match lookup("FORGE_SEED") {
            Some(value) => parse_flag(&value)
                .ok_or_else(|| ConfigError::InvalidValue("FORGE_SEED".to_string()))?,
            None => false,
        };

        Ok(AdminConfig {
            db_path,
            db_max_connections,
            log_filter,
            seed,
        })
    }
}

/// Platform-specific data file path.
///
/// - **macOS**: `~/Library/Application Support/com.forge.admin/forge.db`
/// - **Windows**: `%APPDATA%\forge\admin\data\forge.db`
/// - **Linux**: `~/.local/share/admin/forge.db`
fn default_db_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("com", "forge", "admin")
        .ok_or_else(|| ConfigError::MissingRequired("FORGE_DB_PATH".to_string()))?;

    Ok(proj_dirs.data_dir().join(DB_FILE_NAME))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AdminConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AdminConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_explicit_values() {
        let config = load(&[
            ("FORGE_DB_PATH", ":memory:"),
            ("FORGE_DB_MAX_CONNECTIONS", "8"),
            ("FORGE_LOG", "debug"),
            ("FORGE_SEED", "true"),
        ])
        .unwrap();

        assert_eq!(config.db_path, PathBuf::from(":memory:"));
        assert_eq!(config.db_max_connections, 8);
        assert_eq!(config.log_filter, "debug");
        assert!(config.seed);
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("FORGE_DB_PATH", "/tmp/forge.db")]).unwrap();
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(!config.seed);
    }

    #[test]
    fn test_rust_log_fallback() {
        let config = load(&[("FORGE_DB_PATH", "x.db"), ("RUST_LOG", "warn")]).unwrap();
        assert_eq!(config.log_filter, "warn");

        let config = load(&[
            ("FORGE_DB_PATH", "x.db"),
            ("RUST_LOG", "warn"),
            ("FORGE_LOG", "trace"),
        ])
        .unwrap();
        assert_eq!(config.log_filter, "trace");
    }

    #[test]
    fn test_invalid_values() {
        let err = load(&[("FORGE_DB_PATH", "x.db"), ("FORGE_DB_MAX_CONNECTIONS", "many")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref v) if v == "FORGE_DB_MAX_CONNECTIONS"));

        let err = load(&[("FORGE_DB_PATH", "x.db"), ("FORGE_DB_MAX_CONNECTIONS", "0")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));

        let err = load(&[("FORGE_DB_PATH", "x.db"), ("FORGE_SEED", "sometimes")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for FORGE_SEED");
    }
}
