use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{ClimateError, Result};
use crate::models::{PrecipitationReading, StationActivity, TemperatureReading, TemperatureSummary};
use crate::utils::dates::{parse_date, to_store_text};

/// Queries over the `measurement` table.
///
/// Dates are stored as `YYYY-MM-DD` text, so bounds are bound as text of the
/// same shape and compared lexically, which matches calendar order.
pub struct MeasurementReader;

impl MeasurementReader {
    pub fn new() -> Self {
        Self
    }

    /// Latest measurement date across all stations.
    pub fn latest_date(&self, conn: &Connection) -> Result<NaiveDate> {
        let latest: Option<String> =
            conn.query_row("SELECT MAX(date) FROM measurement", [], |row| row.get(0))?;
        latest
            .as_deref()
            .map(parse_date)
            .ok_or(ClimateError::NoMeasurements)?
    }

    /// Latest measurement date recorded by one station.
    pub fn latest_date_for_station(&self, conn: &Connection, station: &str) -> Result<NaiveDate> {
        let latest: Option<String> = conn.query_row(
            "SELECT MAX(date) FROM measurement WHERE station = ?1",
            params![station],
            |row| row.get(0),
        )?;
        latest
            .as_deref()
            .map(parse_date)
            .ok_or(ClimateError::NoMeasurements)?
    }

    pub fn earliest_date(&self, conn: &Connection) -> Result<Option<String>> {
        Ok(conn.query_row("SELECT MIN(date) FROM measurement", [], |row| row.get(0))?)
    }

    pub fn count(&self, conn: &Connection) -> Result<i64> {
        Ok(conn.query_row("SELECT COUNT(*) FROM measurement", [], |row| row.get(0))?)
    }

    /// Precipitation values dated strictly after `after`, in store order.
    pub fn precipitation_after(
        &self,
        conn: &Connection,
        after: NaiveDate,
    ) -> Result<Vec<PrecipitationReading>> {
        let mut stmt = conn.prepare(
            "SELECT date, prcp
             FROM measurement
             WHERE date > ?1
             ORDER BY id",
        )?;

        let readings = stmt
            .query_map(params![to_store_text(after)], |row| {
                Ok(PrecipitationReading {
                    date: row.get(0)?,
                    prcp: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(readings)
    }

    /// Measurement counts per station, most active first. Equal counts are
    /// ordered by station identifier.
    pub fn station_activity(&self, conn: &Connection) -> Result<Vec<StationActivity>> {
        let mut stmt = conn.prepare(
            "SELECT station, COUNT(*) AS observations
             FROM measurement
             GROUP BY station
             ORDER BY observations DESC, station ASC",
        )?;

        let activity = stmt
            .query_map([], |row| {
                Ok(StationActivity {
                    station: row.get(0)?,
                    count: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(activity)
    }

    pub fn most_active_station(&self, conn: &Connection) -> Result<Option<StationActivity>> {
        let active = conn
            .query_row(
                "SELECT station, COUNT(*) AS observations
                 FROM measurement
                 GROUP BY station
                 ORDER BY observations DESC, station ASC
                 LIMIT 1",
                [],
                |row| {
                    Ok(StationActivity {
                        station: row.get(0)?,
                        count: row.get(1)?,
                    })
                },
            )
            .optional()?;

        Ok(active)
    }

    /// Temperature observations for one station dated strictly after `after`,
    /// in store order.
    pub fn temperatures_after(
        &self,
        conn: &Connection,
        station: &str,
        after: NaiveDate,
    ) -> Result<Vec<TemperatureReading>> {
        let mut stmt = conn.prepare(
            "SELECT date, tobs
             FROM measurement
             WHERE date > ?1 AND station = ?2
             ORDER BY id",
        )?;

        let readings = stmt
            .query_map(params![to_store_text(after), station], |row| {
                Ok(TemperatureReading {
                    date: row.get(0)?,
                    tobs: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(readings)
    }

    /// MIN/AVG/MAX of `tobs` for `after < date`, or `after < date < before`
    /// when an upper bound is given. Both bounds are exclusive.
    pub fn temperature_summary(
        &self,
        conn: &Connection,
        after: NaiveDate,
        before: Option<NaiveDate>,
    ) -> Result<TemperatureSummary> {
        let summary = match before {
            Some(before) => conn.query_row(
                "SELECT MIN(tobs), AVG(tobs), MAX(tobs)
                 FROM measurement
                 WHERE date > ?1 AND date < ?2",
                params![to_store_text(after), to_store_text(before)],
                map_summary,
            )?,
            None => conn.query_row(
                "SELECT MIN(tobs), AVG(tobs), MAX(tobs)
                 FROM measurement
                 WHERE date > ?1",
                params![to_store_text(after)],
                map_summary,
            )?,
        };

        Ok(summary)
    }
}

fn map_summary(row: &rusqlite::Row<'_>) -> rusqlite::Result<TemperatureSummary> {
    Ok(TemperatureSummary::new(row.get(0)?, row.get(1)?, row.get(2)?))
}

impl Default for MeasurementReader {
    fn default() -> Self {
        Self::new()
    }
}
