use chrono::{Duration, NaiveDate};

use crate::error::{ClimateError, Result};
use crate::utils::constants::{DATE_FORMAT, FINAL_DATE_FORMAT, TRAILING_WINDOW_DAYS};

/// Parse a strict `YYYY-MM-DD` date.
///
/// chrono alone accepts unpadded fields and signed years, so the shape is
/// checked first: ten ASCII characters, digits everywhere except the two
/// dashes at offsets 4 and 7.
///
/// # Examples
/// ```
/// use climate_api::utils::parse_date;
///
/// let date = parse_date("2017-08-23").unwrap();
/// assert_eq!(date.to_string(), "2017-08-23");
/// assert!(parse_date("2017-8-23").is_err());
/// ```
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return Err(ClimateError::InvalidFormat(format!(
            "Invalid date: '{}'. Expected format: 'YYYY-MM-DD'",
            text
        )));
    }

    Ok(NaiveDate::parse_from_str(text, DATE_FORMAT)?)
}

/// First excluded day of the trailing window ending at `latest`.
/// Rows qualify when their date is strictly after this value.
pub fn window_start(latest: NaiveDate) -> NaiveDate {
    latest - Duration::days(TRAILING_WINDOW_DAYS)
}

/// Render the final dataset date the way range errors report it,
/// as a midnight timestamp (`2017-08-23 00:00:00`).
pub fn final_date_text(date: NaiveDate) -> String {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.format(FINAL_DATE_FORMAT).to_string())
        .unwrap_or_else(|| date.to_string())
}

/// Store representation of a date.
pub fn to_store_text(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
