//! Month buckets for month-by-month fetching.
//!
//! The backend serves exams one calendar month at a time, so a visible
//! date window is split into the sequence of months it touches before
//! any request goes out.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single (year, month) unit of backend querying.
///
/// Months are 1-based (1 = January). The derived ordering is
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthBucket {
    pub year: i32,
    pub month: u32,
}

impl MonthBucket {
    pub fn new(year: i32, month: u32) -> Self {
        MonthBucket { year, month }
    }

    /// The bucket a given date falls in.
    pub fn containing(date: NaiveDate) -> Self {
        MonthBucket {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The bucket one calendar month later, rolling December over into
    /// January of the next year.
    pub fn next(self) -> Self {
        if self.month == 12 {
            MonthBucket {
                year: self.year + 1,
                month: 1,
            }
        } else {
            MonthBucket {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for MonthBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// All months a date range touches, in chronological order.
///
/// The sequence starts at the bucket containing `start` and includes
/// the bucket containing `end`, so it always has at least one element
/// and never repeats a month. A range with `end` before `start` yields
/// just the starting bucket; callers validate their windows before
/// getting here (see `ExamWindow::new`).
pub fn months_in_range(start: NaiveDate, end: NaiveDate) -> Vec<MonthBucket> {
    let last = MonthBucket::containing(end);
    let mut cursor = MonthBucket::containing(start);

    let mut buckets = vec![cursor];
    while cursor < last {
        cursor = cursor.next();
        buckets.push(cursor);
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_month_yields_one_bucket() {
        let buckets = months_in_range(date(2024, 3, 5), date(2024, 3, 28));
        assert_eq!(buckets, vec![MonthBucket::new(2024, 3)]);
    }

    #[test]
    fn test_year_boundary_yields_both_months_in_order() {
        let buckets = months_in_range(date(2024, 12, 15), date(2025, 1, 10));
        assert_eq!(
            buckets,
            vec![MonthBucket::new(2024, 12), MonthBucket::new(2025, 1)]
        );
    }

    #[test]
    fn test_multi_month_range_is_strictly_increasing() {
        let buckets = months_in_range(date(2024, 11, 25), date(2025, 2, 2));
        assert_eq!(buckets.len(), 4);
        for pair in buckets.windows(2) {
            assert!(pair[0] < pair[1], "Buckets out of order: {:?}", pair);
        }
        assert_eq!(buckets[0], MonthBucket::new(2024, 11));
        assert_eq!(buckets[3], MonthBucket::new(2025, 2));
    }

    #[test]
    fn test_december_rolls_over_to_january() {
        assert_eq!(MonthBucket::new(2024, 12).next(), MonthBucket::new(2025, 1));
        assert_eq!(MonthBucket::new(2024, 5).next(), MonthBucket::new(2024, 6));
    }

    #[test]
    fn test_display_pads_month() {
        assert_eq!(MonthBucket::new(2025, 3).to_string(), "2025-03");
    }
}
