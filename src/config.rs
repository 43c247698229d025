//! Runtime configuration, read once at startup from the environment.

use crate::error::ServerError;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// TCP port the listener binds on all interfaces.
    pub port: u16,
    /// Directory that unbound paths are resolved against.
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl Config {
    /// Reads `SPRIG_PORT` and `SPRIG_STATIC_DIR`, falling back to the
    /// defaults when unset. A present but unparsable port is an error
    /// rather than a silent fallback.
    pub fn from_env() -> Result<Self, ServerError> {
        let mut config = Self::default();

        if let Ok(port) = std::env::var("SPRIG_PORT") {
            config.port = port.parse().map_err(|_| ServerError::InvalidConfig {
                name: "SPRIG_PORT",
                value: port,
            })?;
        }

        if let Ok(dir) = std::env::var("SPRIG_STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
