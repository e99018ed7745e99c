//! Application-window status for the detail view.

use chrono::NaiveDate;

/// Where an exam's application window stands relative to `now`.
///
/// Pure function of the three dates, used only to pick detail-view
/// text and styling. A window with either bound missing has simply
/// not been announced yet; that is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    /// Either bound of the application window is missing.
    Unannounced,
    /// Applications open in `days_until_open` days.
    Upcoming { days_until_open: i64 },
    /// Applications are open for another `days_left` days.
    Open { days_left: i64 },
    /// The deadline has passed.
    Closed,
}

impl ApplicationStatus {
    pub fn classify(
        now: NaiveDate,
        app_start: Option<NaiveDate>,
        app_end: Option<NaiveDate>,
    ) -> Self {
        let (start, end) = match (app_start, app_end) {
            (Some(start), Some(end)) => (start, end),
            _ => return ApplicationStatus::Unannounced,
        };

        if now < start {
            ApplicationStatus::Upcoming {
                days_until_open: (start - now).num_days(),
            }
        } else if now <= end {
            ApplicationStatus::Open {
                days_left: (end - now).num_days(),
            }
        } else {
            ApplicationStatus::Closed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_now_inside_window_is_open() {
        let status = ApplicationStatus::classify(
            date(2024, 3, 10),
            Some(date(2024, 3, 1)),
            Some(date(2024, 3, 20)),
        );
        assert_eq!(status, ApplicationStatus::Open { days_left: 10 });
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let start = Some(date(2024, 3, 1));
        let end = Some(date(2024, 3, 20));
        assert_eq!(
            ApplicationStatus::classify(date(2024, 3, 1), start, end),
            ApplicationStatus::Open { days_left: 19 }
        );
        assert_eq!(
            ApplicationStatus::classify(date(2024, 3, 20), start, end),
            ApplicationStatus::Open { days_left: 0 }
        );
    }

    #[test]
    fn test_missing_bound_is_unannounced() {
        let end = Some(date(2024, 3, 20));
        assert_eq!(
            ApplicationStatus::classify(date(2024, 3, 10), None, end),
            ApplicationStatus::Unannounced
        );
        assert_eq!(
            ApplicationStatus::classify(date(2024, 3, 10), Some(date(2024, 3, 1)), None),
            ApplicationStatus::Unannounced
        );
    }

    #[test]
    fn test_before_window_counts_days_until_open() {
        let status = ApplicationStatus::classify(
            date(2024, 2, 25),
            Some(date(2024, 3, 1)),
            Some(date(2024, 3, 20)),
        );
        assert_eq!(status, ApplicationStatus::Upcoming { days_until_open: 5 });
    }

    #[test]
    fn test_after_deadline_is_closed() {
        let status = ApplicationStatus::classify(
            date(2024, 3, 21),
            Some(date(2024, 3, 1)),
            Some(date(2024, 3, 20)),
        );
        assert_eq!(status, ApplicationStatus::Closed);
    }
}
