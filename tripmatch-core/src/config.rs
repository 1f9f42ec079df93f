//! Server configuration.

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{TripMatchError, TripMatchResult};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

const ENV_PREFIX: &str = "TRIPMATCH";

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Configuration read from ~/.config/tripmatch/config.toml, overridden by
/// `TRIPMATCH_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    pub fn config_path() -> TripMatchResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| TripMatchError::Config("Could not determine config directory".into()))?
            .join("tripmatch");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default config path. A missing file is fine.
    pub fn load() -> TripMatchResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, with the process environment on top.
    pub fn load_from(path: &Path) -> TripMatchResult<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Load from `path`, with `env` taking precedence over the file.
    pub fn load_with_env(path: &Path, env: Environment) -> TripMatchResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env.try_parsing(true))
            .build()
            .map_err(|e| TripMatchError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| TripMatchError::Config(e.to_string()))
    }

    pub fn socket_addr(&self) -> TripMatchResult<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| TripMatchError::Config(format!("Invalid host address '{}'", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tripmatch-{}-{}", name, uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("tripmatch-does-not-exist/config.toml");
        let config = ServerConfig::load_with_env(&path, env(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_file_values_are_read() {
        let path = temp_config("file", "host = \"0.0.0.0\"\nport = 8080\n");
        let config = ServerConfig::load_with_env(&path, env(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_env_overrides_file() {
        let path = temp_config("env", "port = 8080\nlog_level = \"warn\"\n");
        let vars = [("TRIPMATCH_PORT", "8081"), ("TRIPMATCH_LOG_LEVEL", "debug")];
        let config = ServerConfig::load_with_env(&path, env(&vars)).unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn test_bad_env_port_is_config_error() {
        let path = std::env::temp_dir().join("tripmatch-does-not-exist/config.toml");
        let result = ServerConfig::load_with_env(&path, env(&[("TRIPMATCH_PORT", "http")]));
        assert!(matches!(result, Err(TripMatchError::Config(_))));
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().unwrap(), SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)));
    }

    #[test]
    fn test_bad_host_is_config_error() {
        let config = ServerConfig {
            host: "localhost:99".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.socket_addr(), Err(TripMatchError::Config(_))));
    }
}
