#![allow(dead_code)]

use climate_api::database::{schema, Database};
use rusqlite::{params, Connection};
use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway SQLite file with the station/measurement schema.
pub struct Fixture {
    _dir: TempDir,
    pub path: PathBuf,
}

impl Fixture {
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("climate.sqlite");

        let conn = Connection::open(&path).unwrap();
        for table in schema::TABLES {
            conn.execute(table.create_sql, []).unwrap();
        }

        Self { _dir: dir, path }
    }

    /// Small dataset ending on 2017-08-23.
    ///
    /// USC00519281 has the most rows (4) and ends on 2017-08-18.
    /// USC00519397 and USC00513117 have 3 rows each.
    pub fn hawaii() -> Self {
        let fixture = Self::empty();
        let conn = fixture.connection();

        fixture.insert_station(&conn, "USC00519397", "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0);
        fixture.insert_station(&conn, "USC00513117", "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6);
        fixture.insert_station(&conn, "USC00519281", "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9);

        let rows: [(&str, &str, Option<f64>, f64); 10] = [
            ("USC00519397", "2016-08-23", Some(0.0), 81.0),
            ("USC00519397", "2016-08-24", Some(0.08), 79.0),
            ("USC00513117", "2016-08-24", Some(2.15), 76.0),
            ("USC00519281", "2016-08-24", None, 77.0),
            ("USC00519281", "2017-01-01", Some(0.0), 62.0),
            ("USC00513117", "2017-01-01", None, 66.0),
            ("USC00519281", "2017-08-17", Some(0.01), 76.0),
            ("USC00519281", "2017-08-18", Some(0.06), 79.0),
            ("USC00513117", "2017-08-18", Some(0.0), 80.0),
            ("USC00519397", "2017-08-23", Some(0.0), 81.0),
        ];
        for (station, date, prcp, tobs) in rows {
            fixture.insert_measurement(&conn, station, date, prcp, tobs);
        }

        fixture
    }

    pub fn connection(&self) -> Connection {
        Connection::open(&self.path).unwrap()
    }

    pub fn database(&self) -> Database {
        Database::new(self.path.clone())
    }

    pub fn insert_station(
        &self,
        conn: &Connection,
        station: &str,
        name: &str,
        latitude: f64,
        longitude: f64,
        elevation: f64,
    ) {
        conn.execute(
            "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![station, name, latitude, longitude, elevation],
        )
        .unwrap();
    }

    pub fn insert_measurement(
        &self,
        conn: &Connection,
        station: &str,
        date: &str,
        prcp: Option<f64>,
        tobs: f64,
    ) {
        conn.execute(
            "INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)",
            params![station, date, prcp, tobs],
        )
        .unwrap();
    }
}
