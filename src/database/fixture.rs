use rusqlite::{params, Connection};

use super::schema::TABLES;

/// In-memory database with the declared schema and no rows.
pub(crate) fn empty_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    for table in TABLES {
        conn.execute(table.create_sql, []).unwrap();
    }
    conn
}

pub(crate) fn insert_station(conn: &Connection, station: &str, name: &str) {
    conn.execute(
        "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES (?1, ?2, 21.3, -157.8, 10.0)",
        params![station, name],
    )
    .unwrap();
}

pub(crate) fn insert_measurement(
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
