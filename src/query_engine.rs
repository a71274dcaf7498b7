use chrono::NaiveDate;
use rusqlite::Connection;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{ClimateError, RequestError, Result};
use crate::models::{DatasetSummary, StationDetails, TemperatureSummary};
use crate::readers::{MeasurementReader, StationReader};
use crate::utils::dates::{final_date_text, parse_date, window_start};

/// Precipitation values grouped by date string.
pub type PrecipitationByDate = BTreeMap<String, Vec<Option<f64>>>;

/// One temperature observation per date string.
pub type TemperatureByDate = BTreeMap<String, f64>;

/// Station metadata keyed by station identifier.
pub type StationsById = BTreeMap<String, StationDetails>;

/// Result of a date-range temperature request: either the aggregate or a
/// rejection that is reported back to the caller as an `error` field.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeOutcome {
    Summary(TemperatureSummary),
    Rejected(RequestError),
}

impl Serialize for RangeOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            RangeOutcome::Summary(summary) => summary.serialize(serializer),
            RangeOutcome::Rejected(reason) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", &reason.to_string())?;
                map.end()
            }
        }
    }
}

/// Parse the single-date route parameter.
pub fn parse_start(start: &str) -> std::result::Result<NaiveDate, RequestError> {
    parse_date(start).map_err(|_| RequestError::MalformedDate)
}

/// Parse both route parameters of a date range. Either failing rejects the pair.
pub fn parse_range(start: &str, end: &str) -> std::result::Result<(NaiveDate, NaiveDate), RequestError> {
    match (parse_date(start), parse_date(end)) {
        (Ok(start), Ok(end)) => Ok((start, end)),
        _ => Err(RequestError::MalformedDates),
    }
}

/// Per-endpoint queries. Every method takes the caller's connection and
/// holds nothing between calls.
pub struct QueryEngine {
    stations: StationReader,
    measurements: MeasurementReader,
}

impl QueryEngine {
    pub fn new() -> Self {
        Self {
            stations: StationReader::new(),
            measurements: MeasurementReader::new(),
        }
    }

    /// Precipitation for the trailing year of the whole dataset, grouped by date.
    pub fn precipitation(&self, conn: &Connection) -> Result<PrecipitationByDate> {
        let latest = self.measurements.latest_date(conn)?;
        let after = window_start(latest);
        debug!("Precipitation window: ({}, {}]", after, latest);

        let mut by_date = PrecipitationByDate::new();
        for reading in self.measurements.precipitation_after(conn, after)? {
            by_date.entry(reading.date).or_default().push(reading.prcp);
        }

        Ok(by_date)
    }

    pub fn stations(&self, conn: &Connection) -> Result<StationsById> {
        self.stations.read_stations_map(conn)
    }

    /// Trailing-year temperature observations of the most active station,
    /// measured from that station's own latest date.
    pub fn temperature_observations(&self, conn: &Connection) -> Result<TemperatureByDate> {
        let active = self
            .measurements
            .most_active_station(conn)?
            .ok_or(ClimateError::NoMeasurements)?;

        let latest = self
            .measurements
            .latest_date_for_station(conn, &active.station)?;
        let after = window_start(latest);
        debug!(
            "Most active station {} ({} rows), window ({}, {}]",
            active.station, active.count, after, latest
        );

        // Rows sharing a date collapse to the last one read.
        let by_date = self
            .measurements
            .temperatures_after(conn, &active.station, after)?
            .into_iter()
            .map(|reading| (reading.date, reading.tobs))
            .collect();

        Ok(by_date)
    }

    /// MIN/AVG/MAX temperature after `start`.
    pub fn temperature_since(&self, conn: &Connection, start: NaiveDate) -> Result<RangeOutcome> {
        let latest = self.measurements.latest_date(conn)?;
        if start > latest {
            return Ok(RangeOutcome::Rejected(RequestError::BeyondDataset {
                final_date: final_date_text(latest),
            }));
        }

        let summary = self.measurements.temperature_summary(conn, start, None)?;
        Ok(RangeOutcome::Summary(summary))
    }

    /// MIN/AVG/MAX temperature strictly between `start` and `end`.
    ///
    /// The end date itself is excluded, so `start == end` always yields an
    /// empty summary.
    pub fn temperature_between(
        &self,
        conn: &Connection,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RangeOutcome> {
        let latest = self.measurements.latest_date(conn)?;
        if start > latest || end > latest {
            return Ok(RangeOutcome::Rejected(RequestError::BeyondDataset {
                final_date: final_date_text(latest),
            }));
        }

        if start > end {
            return Ok(RangeOutcome::Rejected(RequestError::StartAfterEnd));
        }

        let summary = self.measurements.temperature_summary(conn, start, Some(end))?;
        Ok(RangeOutcome::Summary(summary))
    }

    pub fn dataset_summary(&self, conn: &Connection) -> Result<DatasetSummary> {
        let last_date = match self.measurements.latest_date(conn) {
            Ok(date) => Some(date.to_string()),
            Err(ClimateError::NoMeasurements) => None,
            Err(e) => return Err(e),
        };

        Ok(DatasetSummary {
            station_count: self.stations.count(conn)?,
            measurement_count: self.measurements.count(conn)?,
            first_date: self.measurements.earliest_date(conn)?,
            last_date,
            most_active: self.measurements.most_active_station(conn)?,
        })
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}
