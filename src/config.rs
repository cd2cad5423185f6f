use std::{env, net::SocketAddr, path::PathBuf};

use anyhow::{Context, Result};
use tracing::info;

pub const DEFAULT_ADDRESS: &str = "0.0.0.0:8000";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20480 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub address: SocketAddr,

    /// Base path the views, API and assets are mounted under.
    pub base_url: String,
    pub static_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source, e.g. a parsed `.env` file.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let address = lookup("ADDRESS")
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .context("ADDRESS must be a socket address such as 0.0.0.0:8000")?;

        let base_url = lookup("BASE_URL").unwrap_or_else(|| String::from("/"));

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("static"));

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(value) => value
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a whole number of bytes")?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let log_file = lookup("LOG_FILE")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Config {
            address,
            base_url,
            static_dir,
            max_upload_bytes,
            log_file,
        })
    }

    pub fn log_startup(&self) {
        info!("Configuration loaded:");
        info!("  Address: {}", self.address);
        info!("  Base URL: {}", self.base_url);
        info!("  Static directory: {}", self.static_dir.display());
        info!("  Max upload size: {} bytes", self.max_upload_bytes);
        match &self.log_file {
            Some(path) => info!("  Log file: {}", path.display()),
            None => info!("  Log file: disabled"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: SocketAddr::from(([0, 0, 0, 0], 8000)),
            base_url: String::from("/"),
            static_dir: PathBuf::from("static"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            log_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_with_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.address.to_string(), DEFAULT_ADDRESS);
        assert_eq!(config.base_url, "/");
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_config_with_all_vars() {
        let config = config_from(&[
            ("ADDRESS", "127.0.0.1:9000"),
            ("BASE_URL", "/ascii/"),
            ("STATIC_DIR", "public"),
            ("MAX_UPLOAD_BYTES", "1024"),
            ("LOG_FILE", "backend.log"),
        ])
        .unwrap();

        assert_eq!(config.address.to_string(), "127.0.0.1:9000");
        assert_eq!(config.base_url, "/ascii/");
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.max_upload_bytes, 1024);
        assert_eq!(config.log_file, Some(PathBuf::from("backend.log")));
    }

    #[test]
    fn test_blank_log_file_disables_file_logging() {
        let config = config_from(&[("LOG_FILE", "  ")]).unwrap();
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_invalid_address() {
        let error = config_from(&[("ADDRESS", "localhost")]).unwrap_err();
        assert!(error.to_string().contains("ADDRESS"));
    }

    #[test]
    fn test_invalid_upload_limit() {
        let error = config_from(&[("MAX_UPLOAD_BYTES", "lots")]).unwrap_err();
        assert!(error.to_string().contains("MAX_UPLOAD_BYTES"));
    }
}
