//! Period tracker state
//!
//! Holds the known and forecast period start dates together with the span
//! used to predict new ones. All mutations are plain in-memory operations;
//! persisting the result is the caller's job (see `store`).

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

use crate::consts::{DATE_FORMAT, FORECAST_COUNT};
use crate::error::AppError;

use super::span::Span;

/// On-disk shape of the state: `{ "dates": [...], "span": n }`; 0 means unset
#[derive(Debug, Clone, Serialize)]
struct StateFile {
    dates: Vec<String>,
    span: i64,
}

/// What a state file may contain when read back. Entries are kept as raw
/// JSON so one bad value never rejects the whole file.
#[derive(Debug, Default, Deserialize)]
struct RawStateFile {
    #[serde(default)]
    dates: Option<Vec<Value>>,
    #[serde(default)]
    span: Option<i64>,
    /// Older save files call the span `length`
    #[serde(default)]
    length: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawStateFile", into = "StateFile")]
pub(crate) struct PeriodTracker {
    dates: BTreeSet<NaiveDate>,
    span: Option<Span>,
}

/// Result of confirming a new period start
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Confirmation {
    /// Later dates were replaced by these forecasts
    Forecast(Vec<NaiveDate>),
    /// Date recorded, but no span is configured so nothing was forecast
    SpanMissing,
}

impl PeriodTracker {
    pub(crate) fn new(span: Option<Span>) -> Self {
        Self {
            dates: BTreeSet::new(),
            span,
        }
    }

    pub(crate) fn dates(&self) -> &BTreeSet<NaiveDate> {
        &self.dates
    }

    pub(crate) fn span(&self) -> Option<Span> {
        self.span
    }

    pub(crate) fn set_span(&mut self, span: Option<Span>) {
        self.span = span;
    }

    pub(crate) fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub(crate) fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Returns `false` if the date was already present
    pub(crate) fn add_confirmed_date(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    /// Remove `date`, and with `also_remove_later` every date after it.
    /// Returns how many dates were dropped.
    pub(crate) fn remove_date(&mut self, date: NaiveDate, also_remove_later: bool) -> usize {
        let mut removed = usize::from(self.dates.remove(&date));
        if also_remove_later {
            removed += self.clear_dates_after(date, false);
        }
        removed
    }

    /// Drop every date after `date` (or on/after it when `inclusive`).
    pub(crate) fn clear_dates_after(&mut self, date: NaiveDate, inclusive: bool) -> usize {
        let cut = if inclusive { Some(date) } else { date.succ_opt() };
        match cut {
            Some(cut) => self.dates.split_off(&cut).len(),
            None => 0,
        }
    }

    /// Step forward from `from` by `span` days, [`FORECAST_COUNT`] times,
    /// recording every step. Stops early at the end of the representable
    /// calendar.
    pub(crate) fn regenerate_forecast(&mut self, from: NaiveDate, span: Span) -> Vec<NaiveDate> {
        let mut generated = Vec::with_capacity(FORECAST_COUNT);
        let mut current = from;
        for _ in 0..FORECAST_COUNT {
            let Some(next) = current.checked_add_days(span.as_offset()) else {
                tracing::warn!(from = %from, span = span.days(), "forecast reached end of calendar");
                break;
            };
            self.dates.insert(next);
            generated.push(next);
            current = next;
        }
        generated
    }

    /// Record a confirmed period start and rebuild the forecast after it
    pub(crate) fn confirm(&mut self, date: NaiveDate) -> Confirmation {
        self.add_confirmed_date(date);
        let cleared = self.clear_dates_after(date, false);
        tracing::debug!(date = %date, cleared, "confirmed date");

        match self.span {
            Some(span) => Confirmation::Forecast(self.regenerate_forecast(date, span)),
            None => Confirmation::SpanMissing,
        }
    }

    /// Append another round of forecasts after the last known date
    pub(crate) fn extend_forecast(&mut self) -> Result<Vec<NaiveDate>, AppError> {
        let span = self.span.ok_or(AppError::SpanNotConfigured)?;
        let last = self.last_date().ok_or(AppError::NoDates)?;
        Ok(self.regenerate_forecast(last, span))
    }

    pub(crate) fn reset(&mut self) {
        self.dates.clear();
    }

    /// Dates within the calendar month containing `day`
    pub(crate) fn dates_in_month(&self, day: NaiveDate) -> Vec<NaiveDate> {
        let Some(first) = day.with_day(1) else {
            return Vec::new();
        };
        match first.checked_add_months(Months::new(1)) {
            Some(next) => self.dates.range(first..next).copied().collect(),
            None => self.dates.range(first..).copied().collect(),
        }
    }

    /// Dates within an optional inclusive range
    pub(crate) fn dates_between(
        &self,
        since: Option<NaiveDate>,
        until: Option<NaiveDate>,
    ) -> Vec<NaiveDate> {
        self.dates
            .iter()
            .copied()
            .filter(|d| since.is_none_or(|s| *d >= s))
            .filter(|d| until.is_none_or(|u| *d <= u))
            .collect()
    }
}

impl From<RawStateFile> for PeriodTracker {
    fn from(file: RawStateFile) -> Self {
        let mut dates = BTreeSet::new();
        for entry in file.dates.unwrap_or_default() {
            let Some(raw) = entry.as_str() else {
                tracing::warn!(entry = %entry, "skipping non-string date");
                continue;
            };
            match NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT) {
                Ok(date) => {
                    dates.insert(date);
                }
                Err(e) => tracing::warn!(entry = %raw, error = %e, "skipping malformed date"),
            }
        }
        Self {
            dates,
            span: file.span.or(file.length).and_then(Span::new),
        }
    }
}

impl From<PeriodTracker> for StateFile {
    fn from(tracker: PeriodTracker) -> Self {
        Self {
            dates: tracker
                .dates
                .iter()
                .map(|d| d.format(DATE_FORMAT).to_string())
                .collect(),
            span: tracker.span.map_or(0, |s| i64::from(s.days())),
        }
    }
}
