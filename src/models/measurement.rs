use serde::{Deserialize, Serialize};

/// One precipitation value from the `measurement` table. `prcp` is nullable
/// in the store and the null is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationReading {
    pub date: String,
    pub prcp: Option<f64>,
}

/// One temperature observation from the `measurement` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    pub date: String,
    pub tobs: f64,
}

/// Number of measurement rows recorded by a station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationActivity {
    pub station: String,
    pub count: i64,
}
