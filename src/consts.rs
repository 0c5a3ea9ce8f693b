/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of forecast dates generated from a confirmed date
pub(crate) const FORECAST_COUNT: usize = 20;

/// Placeholder printed when there is no last date
pub(crate) const NO_DATE: &str = "-";

/// File name of the persisted state inside the data directory
pub(crate) const DATA_FILE_NAME: &str = "savedata.json";

/// Environment variable overriding the state file location
pub(crate) const DATA_FILE_ENV: &str = "PERIODS_DATA_FILE";
