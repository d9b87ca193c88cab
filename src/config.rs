//! Configuration management for the file transfer responder
//!
//! Settings are layered: built-in defaults, then an optional
//! `ft-responder.toml`, then `FT_RESPONDER_*` environment variables,
//! and finally the control port given on the command line.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Lowest control port accepted on the command line
pub const MIN_CONTROL_PORT: u16 = 4000;

/// Highest control port accepted on the command line
pub const MAX_CONTROL_PORT: u16 = 65000;

/// Server configuration, loaded once at startup
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// IP address to bind the control listener
    pub bind_address: String,

    /// Port for the control connection (taken from the command line)
    pub control_port: u16,

    /// Directory whose entries are listed and served
    pub server_root: String,

    /// Pause before dialing the peer's data port, in milliseconds
    pub data_connect_delay_ms: u64,
}

impl ServerConfig {
    /// Load configuration with the command-line port applied on top
    pub fn load(control_port: u16) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("bind_address", "0.0.0.0")?
            .set_default("server_root", ".")?
            .set_default("data_connect_delay_ms", 1000_i64)?
            .add_source(File::with_name("ft-responder").required(false))
            .add_source(Environment::with_prefix("FT_RESPONDER"))
            .set_override("control_port", i64::from(control_port))?
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Get bind address and control port as socket address
    pub fn control_socket(&self) -> String {
        format!("{}:{}", self.bind_address, self.control_port)
    }

    /// Get server root as PathBuf
    pub fn server_root_path(&self) -> PathBuf {
        PathBuf::from(&self.server_root)
    }

    /// Get the pre-dial pause as Duration
    pub fn data_connect_delay(&self) -> Duration {
        Duration::from_millis(self.data_connect_delay_ms)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.bind_address.is_empty() {
            return Err(config::ConfigError::Message(
                "bind_address cannot be empty".into(),
            ));
        }

        if self.server_root.is_empty() {
            return Err(config::ConfigError::Message(
                "server_root cannot be empty".into(),
            ));
        }

        Ok(())
    }
}

/// Parse and range-check the control port from the command-line arguments.
///
/// Expects the full argument list including the program name. The single
/// positional argument must be a decimal port between 4,000 and 65,000.
pub fn port_from_args(args: &[String]) -> Result<u16, String> {
    let raw = args.get(1).ok_or_else(|| "no port provided".to_string())?;

    let port: u16 = raw
        .parse()
        .map_err(|_| format!("invalid port number: {}", raw))?;

    if !(MIN_CONTROL_PORT..=MAX_CONTROL_PORT).contains(&port) {
        return Err(format!(
            "port {} out of range {}-{}",
            port, MIN_CONTROL_PORT, MAX_CONTROL_PORT
        ));
    }

    Ok(port)
}
