use chrono::NaiveDate;
use serde_json::{Value, json};

use crate::consts::DATE_FORMAT;
use crate::error::AppError;
use crate::tracker::PeriodTracker;

fn date_strings(dates: &[NaiveDate]) -> Vec<String> {
    dates
        .iter()
        .map(|d| d.format(DATE_FORMAT).to_string())
        .collect()
}

fn summary(tracker: &PeriodTracker) -> Value {
    json!({
        "span": tracker.span().map(|s| s.days()),
        "last_date": tracker.last_date().map(|d| d.format(DATE_FORMAT).to_string()),
    })
}

pub(crate) fn month_json(tracker: &PeriodTracker, month: NaiveDate) -> Result<String, AppError> {
    let mut value = summary(tracker);
    value["month"] = json!(month.format("%Y-%m").to_string());
    value["dates"] = json!(date_strings(&tracker.dates_in_month(month)));
    Ok(serde_json::to_string_pretty(&value)?)
}

pub(crate) fn dates_json(dates: &[NaiveDate]) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(&date_strings(dates))?)
}

pub(crate) fn tracker_json(tracker: &PeriodTracker) -> Result<String, AppError> {
    let mut value = summary(tracker);
    value["dates"] = json!(date_strings(
        &tracker.dates().iter().copied().collect::<Vec<_>>()
    ));
    Ok(serde_json::to_string_pretty(&value)?)
}

/// JSON for the outcome of a mutation: the dates it produced plus the new state
pub(crate) fn change_json(
    tracker: &PeriodTracker,
    key: &str,
    dates: &[NaiveDate],
) -> Result<String, AppError> {
    let mut value = summary(tracker);
    value[key] = json!(date_strings(dates));
    value["count"] = json!(tracker.dates().len());
    Ok(serde_json::to_string_pretty(&value)?)
}

pub(crate) fn removed_json(tracker: &PeriodTracker, removed: usize) -> Result<String, AppError> {
    let mut value = summary(tracker);
    value["removed"] = json!(removed);
    value["count"] = json!(tracker.dates().len());
    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::Span;

    fn sample() -> PeriodTracker {
        let mut t = PeriodTracker::new(Span::new(27));
        t.add_confirmed_date(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        t.add_confirmed_date(NaiveDate::from_ymd_opt(2024, 2, 6).unwrap());
        t
    }

    #[test]
    fn month_json_filters_to_month() {
        let month = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let value: Value = serde_json::from_str(&month_json(&sample(), month).unwrap()).unwrap();
        assert_eq!(value["month"], "2024-02");
        assert_eq!(value["dates"], json!(["2024-02-06"]));
        assert_eq!(value["span"], 27);
        assert_eq!(value["last_date"], "2024-02-06");
    }

    #[test]
    fn removed_json_reports_counts() {
        let value: Value = serde_json::from_str(&removed_json(&sample(), 3).unwrap()).unwrap();
        assert_eq!(value["removed"], 3);
        assert_eq!(value["count"], 2);
    }

    #[test]
    fn tracker_json_unset_span_is_null() {
        let value: Value =
            serde_json::from_str(&tracker_json(&PeriodTracker::default()).unwrap()).unwrap();
        assert!(value["span"].is_null());
        assert!(value["last_date"].is_null());
        assert_eq!(value["dates"], json!([]));
    }
}
