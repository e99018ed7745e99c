//! The visible date window the calendar requests events for.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{ExamCalError, ExamCalResult};
use crate::month::{months_in_range, MonthBucket};

/// A visible date window `[start, end)`. The end bound is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl ExamWindow {
    /// Build a window, rejecting `end` before `start` so a malformed
    /// window fails before any request is issued.
    pub fn new(start: NaiveDate, end: NaiveDate) -> ExamCalResult<Self> {
        if end < start {
            return Err(ExamCalError::InvalidWindow { start, end });
        }
        Ok(ExamWindow { start, end })
    }

    /// Parse a window from CLI date strings.
    /// Both bounds are YYYY-MM-DD; `to` is exclusive.
    pub fn from_args(from: &str, to: &str) -> ExamCalResult<Self> {
        Self::new(parse_date(from)?, parse_date(to)?)
    }

    /// The window a Monday-first month grid shows: the month padded to
    /// whole weeks on both sides, end exclusive. Spans up to three
    /// month buckets.
    pub fn month_grid(year: i32, month: u32) -> ExamCalResult<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(ExamCalError::InvalidMonth { year, month })?;

        // First day of the following month = exclusive end of this one.
        let next = MonthBucket::new(year, month).next();
        let month_end = NaiveDate::from_ymd_opt(next.year, next.month, 1)
            .ok_or(ExamCalError::InvalidMonth { year, month })?;

        let lead = first.weekday().num_days_from_monday() as i64;
        let tail = month_end.weekday().num_days_from_monday() as i64;

        let start = first - Duration::days(lead);
        let end = if tail == 0 {
            month_end
        } else {
            month_end + Duration::days(7 - tail)
        };

        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Strict half-open containment: `start <= date < end`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// The months this window spans, in chronological order.
    pub fn month_buckets(&self) -> Vec<MonthBucket> {
        months_in_range(self.start, self.end)
    }
}

/// Parse YYYY-MM-DD into a date.
fn parse_date(s: &str) -> ExamCalResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ExamCalError::DateFormat(s.to_string()))
}
