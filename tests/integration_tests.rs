mod common;

use chrono::NaiveDate;
use climate_api::database::schema;
use climate_api::error::ClimateError;
use climate_api::models::TemperatureSummary;
use climate_api::query_engine::{QueryEngine, RangeOutcome};
use climate_api::readers::{MeasurementReader, StationReader};
use common::Fixture;
use pretty_assertions::assert_eq;
use rusqlite::Connection;
use validator::Validate;

#[test]
fn test_verify_schema_on_file() {
    let fixture = Fixture::hawaii();
    assert!(fixture.database().verify_schema().is_ok());
}

#[test]
fn test_verify_schema_rejects_wrong_database() {
    let fixture = Fixture::empty();
    let conn = fixture.connection();
    conn.execute("DROP TABLE station", []).unwrap();
    drop(conn);

    match fixture.database().verify_schema() {
        Err(ClimateError::MissingTable { table }) => assert_eq!(table, "station"),
        other => panic!("expected missing table, got {:?}", other),
    }
}

#[test]
fn test_stations_are_valid() {
    let fixture = Fixture::hawaii();
    let conn = fixture.database().open().unwrap();

    let stations = StationReader::new().read_stations(&conn).unwrap();
    assert_eq!(stations.len(), 3);
    for station in &stations {
        assert!(station.validate().is_ok(), "{:?}", station);
    }
}

#[test]
fn test_precipitation_counts_match_rows_in_window() {
    let fixture = Fixture::hawaii();
    let conn = fixture.database().open().unwrap();

    let by_date = QueryEngine::new().precipitation(&conn).unwrap();
    let window_start = "2016-08-23";

    for (date, values) in &by_date {
        assert!(date.as_str() > window_start, "{} is outside the window", date);

        let rows: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM measurement WHERE date = ?1",
                [date],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(values.len() as i64, rows, "row count for {}", date);
    }

    assert!(!by_date.contains_key("2016-08-23"));
}

#[test]
fn test_station_keys_match_store() {
    let fixture = Fixture::hawaii();
    let conn = fixture.database().open().unwrap();

    let stations = QueryEngine::new().stations(&conn).unwrap();

    let mut stmt = conn
        .prepare("SELECT DISTINCT station FROM station ORDER BY station")
        .unwrap();
    let expected: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<rusqlite::Result<_>>()
        .unwrap();

    let keys: Vec<String> = stations.keys().cloned().collect();
    assert_eq!(keys, expected);
}

#[test]
fn test_most_active_tie_prefers_lowest_identifier() {
    let fixture = Fixture::empty();
    let conn = fixture.connection();
    for station in ["USC3", "USC1", "USC2"] {
        fixture.insert_measurement(&conn, station, "2017-01-01", None, 70.0);
        fixture.insert_measurement(&conn, station, "2017-01-02", None, 71.0);
    }

    let active = MeasurementReader::new()
        .most_active_station(&conn)
        .unwrap()
        .unwrap();
    assert_eq!(active.station, "USC1");
}

#[test]
fn test_start_after_end_rejected_regardless_of_data() {
    let engine = QueryEngine::new();
    let start = NaiveDate::from_ymd_opt(2017, 3, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2017, 2, 1).unwrap();

    for fixture in [Fixture::hawaii(), sparse_fixture()] {
        let conn = fixture.database().open().unwrap();
        let outcome = engine.temperature_between(&conn, start, end).unwrap();
        assert_eq!(
            outcome,
            RangeOutcome::Rejected(climate_api::RequestError::StartAfterEnd)
        );
    }
}

#[test]
fn test_start_equals_end_is_empty() {
    let fixture = Fixture::hawaii();
    let conn = fixture.database().open().unwrap();
    let day = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap();

    let outcome = QueryEngine::new()
        .temperature_between(&conn, day, day)
        .unwrap();
    assert_eq!(outcome, RangeOutcome::Summary(TemperatureSummary::default()));
}

#[tokio::test]
async fn test_dataset_summary_through_database() {
    let fixture = Fixture::hawaii();

    let summary = fixture
        .database()
        .with_connection(|conn| {
            schema::verify(conn)?;
            QueryEngine::new().dataset_summary(conn)
        })
        .await
        .unwrap();

    assert_eq!(summary.station_count, 3);
    assert_eq!(summary.measurement_count, 10);
    assert_eq!(summary.first_date.as_deref(), Some("2016-08-23"));
    assert_eq!(summary.last_date.as_deref(), Some("2017-08-23"));
    assert_eq!(summary.most_active.unwrap().station, "USC00519281");
}

fn sparse_fixture() -> Fixture {
    let fixture = Fixture::empty();
    let conn: Connection = fixture.connection();
    fixture.insert_station(&conn, "USC1", "ONLY STATION", 20.0, -155.0, 1.0);
    fixture.insert_measurement(&conn, "USC1", "2020-06-01", Some(0.2), 75.0);
    fixture
}
