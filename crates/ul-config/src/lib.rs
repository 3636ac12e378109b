//! # ul-config
//!
//! Layered settings for the Urban Living binary:
//! built-in defaults → optional TOML file → `URBAN_LIVING__*` environment variables.
//!
//! ```text
//! URBAN_LIVING__SERVER__PORT=9000
//! URBAN_LIVING__STORAGE__BACKEND=local
//! URBAN_LIVING__STORE__DECREMENT_ON_UNLIKE=true
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;
use ul_core::StoreOptions;

/// Points at an explicit config file; otherwise `config/default.toml` is tried.
pub const CONFIG_PATH_VAR: &str = "URBAN_LIVING_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
const ENV_PREFIX: &str = "URBAN_LIVING";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    #[default]
    Sqlite,
    Local,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub sqlite_url: String,
    pub local_root: PathBuf,
    /// Prepended to the three collection keys
    pub key_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            sqlite_url: "sqlite:urban_living.db?mode=rwc".into(),
            local_root: PathBuf::from("./data/store"),
            key_prefix: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub decrement_on_unlike: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: LogFormat::default(), filter: "info".into() }
    }
}

impl AppConfig {
    /// Reads `.env`, the config file and the process environment.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let path = std::env::var(CONFIG_PATH_VAR).ok();
        let explicit = path.is_some();
        let path = PathBuf::from(path.unwrap_or_else(|| DEFAULT_CONFIG_PATH.into()));

        let config = Config::builder()
            .add_source(File::from(path.as_path()).format(FileFormat::Toml).required(explicit))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        loaded.validate()?;
        tracing::debug!(
            path = %path.display(),
            backend = ?loaded.storage.backend,
            "configuration loaded"
        );
        Ok(loaded)
    }

    /// Defaults overlaid with a TOML document; the environment is not consulted.
    pub fn from_toml(toml: &str) -> Result<Self> {
        let loaded: Self = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be non-zero".into()));
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Invalid("server.host must not be empty".into()));
        }
        match self.storage.backend {
            StorageBackend::Sqlite if self.storage.sqlite_url.trim().is_empty() => {
                let reason = "storage.sqlite_url is required for the sqlite backend";
                Err(ConfigError::Invalid(reason.into()))
            }
            StorageBackend::Local if self.storage.local_root.as_os_str().is_empty() => {
                let reason = "storage.local_root is required for the local backend";
                Err(ConfigError::Invalid(reason.into()))
            }
            _ => Ok(()),
        }
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            key_prefix: self.storage.key_prefix.clone(),
            decrement_on_unlike: self.store.decrement_on_unlike,
        }
    }

    pub fn local_root(&self) -> &Path {
        &self.storage.local_root
    }
}
