use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::error::{ClimateError, Result};
use crate::utils::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_DATABASE_PATH, ENV_PREFIX,
};

/// Configuration for the API service
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServiceConfig {
    #[validate(nested)]
    pub server: ServerConfig,

    #[validate(nested)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to
    #[validate(length(min = 1))]
    pub bind_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DatabaseConfig {
    /// SQLite file holding the `station` and `measurement` tables
    pub path: PathBuf,

    /// How long a query waits on a locked database, in milliseconds
    #[validate(range(min = 1, max = 600_000))]
    pub busy_timeout_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            },
            database: DatabaseConfig {
                path: PathBuf::from(DEFAULT_DATABASE_PATH),
                busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            },
        }
    }
}

impl ServiceConfig {
    /// Load configuration from defaults, an optional TOML file, and
    /// `CLIMATE_API__SECTION__KEY` environment variables, in increasing
    /// priority.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("server.bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("database.path", DEFAULT_DATABASE_PATH)?
            .set_default("database.busy_timeout_ms", DEFAULT_BUSY_TIMEOUT_MS)?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: Self = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Apply command line overrides on top of the loaded values
    pub fn with_overrides(mut self, bind: Option<String>, database: Option<PathBuf>) -> Self {
        if let Some(bind) = bind {
            self.server.bind_address = bind;
        }
        if let Some(path) = database {
            self.database.path = path;
        }
        self
    }

    /// Validate the configuration
    pub fn check(&self) -> Result<()> {
        self.validate()?;

        if self.database.path.as_os_str().is_empty() {
            return Err(ClimateError::InvalidFormat(
                "Database path cannot be empty".to_string(),
            ));
        }

        self.socket_addr()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.server.bind_address.parse().map_err(|_| {
            ClimateError::InvalidFormat(format!(
                "Invalid bind address: '{}'",
                self.server.bind_address
            ))
        })
    }
}
