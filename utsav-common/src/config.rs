//! Configuration loading
//!
//! Every setting resolves through the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Default backend base URL
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5720";
/// Default bind address for the front-end service
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5730";
/// Default admin session lifetime
pub const DEFAULT_SESSION_TTL_SECONDS: u64 = 3600;

/// Resolved front-end configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the external festival backend
    pub backend_url: String,
    /// Address the front-end service listens on
    pub bind_addr: String,
    /// Admin login name
    pub admin_username: String,
    /// Admin password; empty disables admin login entirely
    pub admin_password: String,
    /// Seconds an admin session token stays valid
    pub session_ttl_seconds: u64,
}

/// Settings read from the TOML config file; all optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub backend_url: Option<String>,
    pub bind_addr: Option<String>,
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    pub session_ttl_seconds: Option<u64>,
}

/// Command-line overrides passed down from the binary
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub backend_url: Option<String>,
    pub bind_addr: Option<String>,
    /// Explicit config file path; skips the platform lookup
    pub config_file: Option<PathBuf>,
}

impl Config {
    /// Resolve the full configuration using the 4-tier priority order.
    ///
    /// A missing config file is not an error (defaults apply); an unreadable
    /// or unparsable one is.
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Config> {
        let file = match &overrides.config_file {
            Some(path) => read_config_file(path)?,
            None => match locate_config_file() {
                Some(path) => read_config_file(&path)?,
                None => FileConfig::default(),
            },
        };

        Ok(Config {
            backend_url: overrides
                .backend_url
                .clone()
                .or_else(|| std::env::var("UTSAV_BACKEND_URL").ok())
                .or(file.backend_url)
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            bind_addr: overrides
                .bind_addr
                .clone()
                .or_else(|| std::env::var("UTSAV_BIND_ADDR").ok())
                .or(file.bind_addr)
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            admin_username: std::env::var("UTSAV_ADMIN_USERNAME")
                .ok()
                .or(file.admin_username)
                .unwrap_or_else(|| "admin".to_string()),
            admin_password: std::env::var("UTSAV_ADMIN_PASSWORD")
                .ok()
                .or(file.admin_password)
                .unwrap_or_default(),
            session_ttl_seconds: std::env::var("UTSAV_SESSION_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .or(file.session_ttl_seconds)
                .unwrap_or(DEFAULT_SESSION_TTL_SECONDS),
        })
    }

    /// Whether admin login is possible at all
    pub fn admin_enabled(&self) -> bool {
        !self.admin_password.is_empty()
    }
}

/// Parse a TOML config file
fn read_config_file(path: &PathBuf) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Cannot read {}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Cannot parse {}: {}", path.display(), e)))
}

/// Find the platform config file, if one exists.
///
/// Linux checks the user config dir first, then /etc; other platforms use
/// the user config dir only.
fn locate_config_file() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("utsav").join("config.toml"));
    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/utsav/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}
