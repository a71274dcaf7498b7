pub mod schema;

#[cfg(test)]
pub(crate) mod fixture;

use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::error::Result;

/// Location of the read-only dataset and how to connect to it.
///
/// There is no long-lived handle: every unit of work opens its own
/// connection and drops it when done, whether it succeeded or not.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
    busy_timeout: Duration,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: Duration::from_millis(crate::utils::DEFAULT_BUSY_TIMEOUT_MS),
        }
    }

    pub fn from_config(config: &DatabaseConfig) -> Self {
        Self::new(config.path.clone()).with_busy_timeout(Duration::from_millis(config.busy_timeout_ms))
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a read-only connection. Fails if the file does not exist.
    pub fn open(&self) -> Result<Connection> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(&self.path, flags)?;
        conn.busy_timeout(self.busy_timeout)?;
        Ok(conn)
    }

    /// Open a connection and check the declared schema against it.
    pub fn verify_schema(&self) -> Result<()> {
        let conn = self.open()?;
        schema::verify(&conn)?;
        info!("Database schema verified: {}", self.path.display());
        Ok(())
    }

    /// Run `work` against a fresh connection on the blocking thread pool.
    pub async fn with_connection<F, T>(&self, work: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let database = self.clone();
        tokio::task::spawn_blocking(move || {
            let conn = database.open()?;
            debug!("Opened connection to {}", database.path.display());
            work(&conn)
        })
        .await?
    }
}
