use axum::extract::{Path, State};
use axum::response::{Html, Json};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::error::{RequestError, Result};
use crate::query_engine::{
    parse_range, parse_start, PrecipitationByDate, RangeOutcome, StationsById, TemperatureByDate,
};
use crate::utils::constants::SERVICE_NAME;

use super::AppState;

const HOME_PAGE: &str = "Welcome to the Climate Analysis API!<br/>\
Available Routes:<br/>\
/api/v1.0/precipitation<br/>\
/api/v1.0/stations<br/>\
/api/v1.0/tobs<br/>\
/api/v1.0/&lt;start&gt;<br/>\
/api/v1.0/&lt;start&gt;/&lt;end&gt;";

fn rejected(reason: RequestError) -> Json<RangeOutcome> {
    warn!("Rejected temperature range request: {}", reason);
    Json(RangeOutcome::Rejected(reason))
}

fn respond(outcome: RangeOutcome) -> Json<RangeOutcome> {
    match outcome {
        RangeOutcome::Rejected(reason) => rejected(reason),
        summary => Json(summary),
    }
}

/// List the available routes
pub async fn home_handler() -> Html<&'static str> {
    Html(HOME_PAGE)
}

/// Health check endpoint
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Trailing-year precipitation grouped by date
pub async fn precipitation_handler(
    State(state): State<AppState>,
) -> Result<Json<PrecipitationByDate>> {
    debug!("Received precipitation request");

    let engine = state.engine.clone();
    let by_date = state
        .database
        .with_connection(move |conn| engine.precipitation(conn))
        .await?;

    info!("Returned precipitation for {} dates", by_date.len());
    Ok(Json(by_date))
}

/// All stations keyed by identifier
pub async fn stations_handler(State(state): State<AppState>) -> Result<Json<StationsById>> {
    debug!("Received stations request");

    let engine = state.engine.clone();
    let stations = state
        .database
        .with_connection(move |conn| engine.stations(conn))
        .await?;

    info!("Returned {} stations", stations.len());
    Ok(Json(stations))
}

/// Trailing-year temperature observations of the most active station
pub async fn tobs_handler(State(state): State<AppState>) -> Result<Json<TemperatureByDate>> {
    debug!("Received temperature observations request");

    let engine = state.engine.clone();
    let by_date = state
        .database
        .with_connection(move |conn| engine.temperature_observations(conn))
        .await?;

    info!("Returned {} temperature observations", by_date.len());
    Ok(Json(by_date))
}

/// Temperature summary for every date after `start`
pub async fn start_handler(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> Result<Json<RangeOutcome>> {
    debug!("Received temperature request from {}", start);

    let start = match parse_start(&start) {
        Ok(date) => date,
        Err(reason) => return Ok(rejected(reason)),
    };

    let engine = state.engine.clone();
    let outcome = state
        .database
        .with_connection(move |conn| engine.temperature_since(conn, start))
        .await?;

    Ok(respond(outcome))
}

/// Temperature summary for dates strictly between `start` and `end`
pub async fn start_end_handler(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<RangeOutcome>> {
    debug!("Received temperature request from {} to {}", start, end);

    let (start, end) = match parse_range(&start, &end) {
        Ok(range) => range,
        Err(reason) => return Ok(rejected(reason)),
    };

    let engine = state.engine.clone();
    let outcome = state
        .database
        .with_connection(move |conn| engine.temperature_between(conn, start, end))
        .await?;

    Ok(respond(outcome))
}
