pub mod measurement;
pub mod station;
pub mod summary;
pub mod temperature;

pub use measurement::{PrecipitationReading, StationActivity, TemperatureReading};
pub use station::{Station, StationDetails};
pub use summary::DatasetSummary;
pub use temperature::TemperatureSummary;
