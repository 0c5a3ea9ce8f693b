use chrono::{Datelike, NaiveDate};

use crate::consts::DATE_FORMAT;
use crate::error::AppError;

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    let s = s.trim();
    // Try YYYYMMDD
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d")
    {
        return Ok(d);
    }
    // Try YYYY-MM-DD
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| AppError::InvalidDate {
        input: s.to_string(),
    })
}

/// Parse `YYYY-MM` (or a full date) into the first day of that month
pub(crate) fn parse_month(s: &str) -> Result<NaiveDate, AppError> {
    let s = s.trim();
    let invalid = || AppError::InvalidMonth {
        input: s.to_string(),
    };
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{s}-01"), DATE_FORMAT) {
        return Ok(d);
    }
    // Accept a full date, snapped to its month
    parse_date(s)
        .ok()
        .and_then(|d| d.with_day0(0))
        .ok_or_else(invalid)
}
