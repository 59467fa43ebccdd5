//! Configuration management for chancesd.
//!
//! Loads settings from /etc/chances/config.toml or uses defaults; the
//! CHANCESD_PORT environment variable overrides the file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Config file path
pub const CONFIG_PATH: &str = "/etc/chances/config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// TCP port to listen on (localhost only)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Load from the config file, falling back to defaults on any problem.
    pub fn load() -> Self {
        let mut config = Self::load_from(Path::new(CONFIG_PATH));

        if let Ok(port) = std::env::var("CHANCESD_PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!("Ignoring invalid CHANCESD_PORT value: {}", port),
            }
        }

        config
    }

    fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
