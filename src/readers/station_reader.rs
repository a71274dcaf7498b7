use rusqlite::Connection;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::models::{Station, StationDetails};

pub struct StationReader;

impl StationReader {
    pub fn new() -> Self {
        Self
    }

    /// Read every row of the station table in store order
    pub fn read_stations(&self, conn: &Connection) -> Result<Vec<Station>> {
        let mut stmt = conn.prepare(
            "SELECT station, name, latitude, longitude, elevation
             FROM station
             ORDER BY id",
        )?;

        let stations = stmt
            .query_map([], |row| {
                Ok(Station::new(
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                ))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(stations)
    }

    /// Read station metadata keyed by station identifier
    pub fn read_stations_map(&self, conn: &Connection) -> Result<BTreeMap<String, StationDetails>> {
        let stations = self.read_stations(conn)?;
        Ok(stations.into_iter().map(Station::into_entry).collect())
    }

    pub fn count(&self, conn: &Connection) -> Result<i64> {
        Ok(conn.query_row("SELECT COUNT(*) FROM station", [], |row| row.get(0))?)
    }
}

impl Default for StationReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::fixture::{empty_connection, insert_station};

    #[test]
    fn test_read_stations() -> Result<()> {
        let conn = empty_connection();
        insert_station(&conn, "USC00519397", "WAIKIKI 717.2, HI US");
        insert_station(&conn, "USC00513117", "KANEOHE 838.1, HI US");

        let reader = StationReader::new();
        let stations = reader.read_stations(&conn)?;

        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].station, "USC00519397");
        assert_eq!(stations[1].name, "KANEOHE 838.1, HI US");
        assert_eq!(reader.count(&conn)?, 2);

        Ok(())
    }

    #[test]
    fn test_read_stations_map() -> Result<()> {
        let conn = empty_connection();
        insert_station(&conn, "USC00519397", "WAIKIKI 717.2, HI US");
        insert_station(&conn, "USC00513117", "KANEOHE 838.1, HI US");

        let map = StationReader::new().read_stations_map(&conn)?;

        assert_eq!(map.len(), 2);
        assert_eq!(map["USC00513117"].name, "KANEOHE 838.1, HI US");
        assert_eq!(map["USC00519397"].latitude, 21.3);

        Ok(())
    }

    #[test]
    fn test_empty_station_table() -> Result<()> {
        let conn = empty_connection();
        let reader = StationReader::new();

        assert!(reader.read_stations(&conn)?.is_empty());
        assert_eq!(reader.count(&conn)?, 0);

        Ok(())
    }
}
