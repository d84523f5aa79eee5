//! Configuration management for the RAX FTP client
//!
//! Built-in defaults, overridden by an optional `ftp-client.toml` in the
//! working directory, overridden in turn by `RAX_FTP_*` environment variables
//! (e.g. `RAX_FTP_HOST`, `RAX_FTP_PASSIVE_MODE=epsv`).

use config::{Config, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::transfer::PassiveMode;

const CONFIG_FILE: &str = "ftp-client";
const ENV_PREFIX: &str = "RAX_FTP";

/// Client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Host name or IP address of the FTP server
    pub host: String,

    /// Port of the FTP control connection
    pub port: u16,

    pub username: String,
    pub password: String,

    /// How passive data ports are requested: auto, pasv or epsv
    pub passive_mode: PassiveMode,

    /// Timeout for dialing control and data connections
    pub connect_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 2121,
            username: "anonymous".to_string(),
            password: "anonymous@".to_string(),
            passive_mode: PassiveMode::Auto,
            connect_timeout_secs: 10,
        }
    }
}

impl ClientConfig {
    /// Load configuration from defaults, ftp-client.toml and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        let settings = Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("username", defaults.username)?
            .set_default("password", defaults.password)?
            .set_default("passive_mode", "auto")?
            .set_default(
                "connect_timeout_secs",
                defaults.connect_timeout_secs as i64,
            )?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: ClientConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.host.trim().is_empty() {
            return Err(config::ConfigError::Message("host cannot be empty".into()));
        }

        if self.port == 0 {
            return Err(config::ConfigError::Message("port cannot be 0".into()));
        }

        if self.connect_timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "connect_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get host and port as a dialable address, bracketing IPv6 literals
    pub fn control_socket(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Get connection timeout as Duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
