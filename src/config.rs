//! Configuration module
//!
//! TOML application config with env override (`PARKING_CONFIG` for the file
//! path, `DATABASE_URL` for the store).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: "sqlite://./parkomatic.db?mode=rwc".to_string(),
            max_connections: 5,
            acquire_timeout_secs: 5,
        }
    }
}

impl DatabaseSection {
    /// `DATABASE_URL` wins over the configured value.
    pub fn connection_url(&self) -> String {
        std::env::var("DATABASE_URL").unwrap_or_else(|_| self.url.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Slot catalog seeded once at deployment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProvisioningConfig {
    pub areas: Vec<String>,
    pub slots_per_area: u32,
}

impl Default for ProvisioningConfig {
    fn default() -> Self {
        Self {
            areas: vec![
                "Hayatabad".to_string(),
                "University Road".to_string(),
                "Saddar".to_string(),
                "Cantt".to_string(),
            ],
            slots_per_area: 3,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub logging: LoggingConfig,
    pub provisioning: ProvisioningConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// Default config file location (~/.config/parking-service/config.toml)
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("parking-service")
        .join("config.toml")
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_seeded_catalog() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.port, 5000);
        assert_eq!(cfg.provisioning.areas.len(), 4);
        assert_eq!(cfg.provisioning.slots_per_area, 3);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            port = 8080

            [provisioning]
            areas = ["Downtown"]
            slots_per_area = 5
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.provisioning.areas, vec!["Downtown".to_string()]);
        assert_eq!(cfg.provisioning.slots_per_area, 5);
        assert_eq!(cfg.database.max_connections, 5);
    }
}
