//! Server configuration loaded from the process environment.
//!
//! A `.env` file, when present, is applied by the binary before loading.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const PORT_VAR: &str = "PORT";
pub const HOST_VAR: &str = "HOST";
pub const DB_PATH_VAR: &str = "ALUMNOS_DB_PATH";
pub const PUBLIC_DIR_VAR: &str = "ALUMNOS_PUBLIC_DIR";
pub const LOG_LEVEL_VAR: &str = "ALUMNOS_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "ALUMNOS_LOG_DIR";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_DB_PATH: &str = "BasePA.s3db";
const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// SQLite database file.
    pub db_path: PathBuf,
    /// Directory served for unmatched GET paths.
    pub public_dir: PathBuf,
    pub log_level: String,
    /// Absolute directory for rotated log files; console only when unset.
    pub log_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            log_level: alumnos_core::default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl ServerConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`; unset or blank values fall back
    /// to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };
        let defaults = Self::default();

        let port = match value(PORT_VAR) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        Ok(Self {
            host: value(HOST_VAR).unwrap_or(defaults.host),
            port,
            db_path: value(DB_PATH_VAR).map_or(defaults.db_path, PathBuf::from),
            public_dir: value(PUBLIC_DIR_VAR).map_or(defaults.public_dir, PathBuf::from),
            log_level: value(LOG_LEVEL_VAR).unwrap_or(defaults.log_level),
            log_dir: value(LOG_DIR_VAR),
        })
    }

    /// Socket address string to bind.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPort(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPort(raw) => {
                write!(f, "{PORT_VAR} must be a port number (0-65535), got `{raw}`")
            }
        }
    }
}

impl Error for ConfigError {}
