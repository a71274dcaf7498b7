use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, ClimateError>;

#[derive(Error, Debug)]
pub enum ClimateError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Date parsing error: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Table '{table}' not found in database")]
    MissingTable { table: &'static str },

    #[error("Table '{table}' is missing column '{column}'")]
    SchemaMismatch {
        table: &'static str,
        column: &'static str,
    },

    #[error("No measurements found in database")]
    NoMeasurements,

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Async task error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl IntoResponse for ClimateError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

/// A request that was understood but rejected. These are answered with a
/// JSON `error` field and HTTP 200, matching the published API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("date must be in the form: YYYY-MM-DD")]
    MalformedDate,

    #[error("dates must be in the form: YYYY-MM-DD")]
    MalformedDates,

    #[error("no data exists beyond {final_date}")]
    BeyondDataset { final_date: String },

    #[error("start date cannot be greater than end date")]
    StartAfterEnd,
}
