use serde::{Deserialize, Serialize};
use validator::Validate;

/// A row of the `station` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Station {
    #[validate(length(min = 1))]
    pub station: String,

    pub name: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    pub elevation: f64,
}

/// Station metadata as published by the stations endpoint, keyed externally
/// by the station identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationDetails {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl Station {
    pub fn new(
        station: String,
        name: String,
        latitude: f64,
        longitude: f64,
        elevation: f64,
    ) -> Self {
        Self {
            station,
            name,
            latitude,
            longitude,
            elevation,
        }
    }

    pub fn into_entry(self) -> (String, StationDetails) {
        (
            self.station,
            StationDetails {
                name: self.name,
                latitude: self.latitude,
                longitude: self.longitude,
                elevation: self.elevation,
            },
        )
    }
}
