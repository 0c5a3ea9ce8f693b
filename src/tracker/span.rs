use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use chrono::Days;

use crate::error::AppError;

/// Number of days between one period start and the next.
///
/// Always strictly positive; an unconfigured span is `Option::<Span>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Span(NonZeroU32);

impl Span {
    /// Build a span from a raw day count, rejecting zero and negatives
    pub(crate) fn new(days: i64) -> Option<Self> {
        u32::try_from(days).ok().and_then(NonZeroU32::new).map(Span)
    }

    pub(crate) fn days(self) -> u32 {
        self.0.get()
    }

    pub(super) fn as_offset(self) -> Days {
        Days::new(u64::from(self.days()))
    }
}

impl FromStr for Span {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<i64>()
            .ok()
            .and_then(Span::new)
            .ok_or_else(|| AppError::InvalidSpan {
                input: trimmed.to_string(),
            })
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days())
    }
}
