//! Static declaration of the two tables the service reads.
//!
//! The store is pre-populated and never written by this crate. The declared
//! columns are checked against the live file once at startup so a wrong
//! database is reported before any request is served.

use rusqlite::Connection;
use std::collections::HashSet;
use tracing::debug;

use crate::error::{ClimateError, Result};
use crate::utils::constants::{MEASUREMENT_TABLE, STATION_TABLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [&'static str],
    pub create_sql: &'static str,
}

pub const STATION: TableSchema = TableSchema {
    name: STATION_TABLE,
    columns: &["id", "station", "name", "latitude", "longitude", "elevation"],
    create_sql: "CREATE TABLE station (
        id INTEGER NOT NULL PRIMARY KEY,
        station TEXT,
        name TEXT,
        latitude FLOAT,
        longitude FLOAT,
        elevation FLOAT
    )",
};

pub const MEASUREMENT: TableSchema = TableSchema {
    name: MEASUREMENT_TABLE,
    columns: &["id", "station", "date", "prcp", "tobs"],
    create_sql: "CREATE TABLE measurement (
        id INTEGER NOT NULL PRIMARY KEY,
        station TEXT,
        date TEXT,
        prcp FLOAT,
        tobs FLOAT
    )",
};

pub const TABLES: [TableSchema; 2] = [STATION, MEASUREMENT];

impl TableSchema {
    fn existing_columns(&self, conn: &Connection) -> Result<HashSet<String>> {
        let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", self.name))?;
        let columns = stmt
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<rusqlite::Result<HashSet<_>>>()?;
        Ok(columns)
    }

    pub fn verify(&self, conn: &Connection) -> Result<()> {
        let existing = self.existing_columns(conn)?;
        if existing.is_empty() {
            return Err(ClimateError::MissingTable { table: self.name });
        }

        for &column in self.columns {
            if !existing.contains(column) {
                return Err(ClimateError::SchemaMismatch {
                    table: self.name,
                    column,
                });
            }
        }

        debug!("Table '{}' matches declared schema", self.name);
        Ok(())
    }
}

/// Check every declared table against the connected database.
pub fn verify(conn: &Connection) -> Result<()> {
    for table in TABLES {
        table.verify(conn)?;
    }
    Ok(())
}
