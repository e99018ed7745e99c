//! Display-ready calendar entries.
//!
//! Entries are derived from backend exam records once per fetch cycle
//! and handed to the render layer; nothing persists across cycles.

use chrono::NaiveDate;
use serde::Serialize;

use crate::category;
use crate::exam::ExamRecord;

/// Colors for rendering one entry: a background/border fill and a
/// contrasting text color. Both are `#rrggbb` hex strings from the
/// static category table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntryColor {
    pub fill: &'static str,
    pub text: &'static str,
}

/// A calendar-displayable entry derived from one backend exam record.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarEntry {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
    /// Exams never carry a time of day.
    pub all_day: bool,
    pub color: EntryColor,
    pub details: EntryDetails,
}

/// Metadata carried through from the record, verbatim, for the detail
/// view.
#[derive(Debug, Clone, Serialize)]
pub struct EntryDetails {
    pub body: String,
    pub link: Option<String>,
    pub app_start: Option<NaiveDate>,
    pub app_end: Option<NaiveDate>,
    pub app_start_formatted: Option<String>,
    pub app_end_formatted: Option<String>,
    pub exam_date_formatted: Option<String>,
}

impl CalendarEntry {
    /// Map a backend record to a display entry. The color pair comes
    /// from the category table; everything else is copied through.
    pub fn from_record(record: ExamRecord) -> Self {
        let color = category::event_color(&record.body);

        CalendarEntry {
            id: record.id,
            title: record.name,
            date: record.date,
            all_day: true,
            color,
            details: EntryDetails {
                body: record.body,
                link: record.link,
                app_start: record.app_start,
                app_end: record.app_end,
                app_start_formatted: record.app_start_formatted,
                app_end_formatted: record.app_end_formatted,
                exam_date_formatted: record.exam_date_formatted,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ExamRecord {
        ExamRecord {
            id: 42,
            name: "Clerk Prelims".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 8, 24).unwrap(),
            body: "IBPS".to_string(),
            link: Some("https://ibps.in".to_string()),
            app_start: Some(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()),
            app_end: Some(NaiveDate::from_ymd_opt(2024, 7, 21).unwrap()),
            app_start_formatted: Some("01 Jul 2024".to_string()),
            app_end_formatted: Some("21 Jul 2024".to_string()),
            exam_date_formatted: Some("24 Aug 2024".to_string()),
        }
    }

    #[test]
    fn test_entry_is_all_day_and_colored_by_category() {
        let entry = CalendarEntry::from_record(record());
        assert!(entry.all_day);
        assert_eq!(entry.color, category::event_color("IBPS"));
        assert_eq!(entry.title, "Clerk Prelims");
    }

    #[test]
    fn test_metadata_is_carried_through_verbatim() {
        let entry = CalendarEntry::from_record(record());
        assert_eq!(entry.details.body, "IBPS");
        assert_eq!(entry.details.link.as_deref(), Some("https://ibps.in"));
        assert_eq!(entry.details.app_start_formatted.as_deref(), Some("01 Jul 2024"));
        assert_eq!(entry.details.exam_date_formatted.as_deref(), Some("24 Aug 2024"));
    }
}
