/// Table names
pub const STATION_TABLE: &str = "station";
pub const MEASUREMENT_TABLE: &str = "measurement";

/// Length of the trailing observation window, in days
pub const TRAILING_WINDOW_DAYS: i64 = 365;

/// Date format used by the store and in request paths
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Text form of the final dataset date in range errors
pub const FINAL_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Service defaults
pub const SERVICE_NAME: &str = "climate-api";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_DATABASE_PATH: &str = "Resources/hawaii.sqlite";
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "CLIMATE_API";
