use serde::{Deserialize, Serialize};

/// MIN/AVG/MAX of `tobs` over a date range. All three are `None` when no
/// row falls inside the range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TemperatureSummary {
    #[serde(rename = "TMIN")]
    pub min: Option<f64>,

    #[serde(rename = "TAVG")]
    pub avg: Option<f64>,

    #[serde(rename = "TMAX")]
    pub max: Option<f64>,
}

impl TemperatureSummary {
    pub fn new(min: Option<f64>, avg: Option<f64>, max: Option<f64>) -> Self {
        Self { min, avg, max }
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.avg.is_none() && self.max.is_none()
    }
}
