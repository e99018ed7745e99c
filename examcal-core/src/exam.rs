//! Wire types for the exam-listing backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One exam record as returned by the backend's month and search
/// endpoints.
///
/// All dates on the wire are plain `YYYY-MM-DD` strings. The search
/// endpoint omits the `*_formatted` fields, so those default to `None`.
/// Records are immutable once received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamRecord {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    /// Conducting-body category (e.g. "UPSC", "SSC").
    pub body: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub app_start: Option<NaiveDate>,
    #[serde(default)]
    pub app_end: Option<NaiveDate>,
    #[serde(default)]
    pub app_start_formatted: Option<String>,
    #[serde(default)]
    pub app_end_formatted: Option<String>,
    #[serde(default)]
    pub exam_date_formatted: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_month_endpoint_record() {
        let json = r#"{
            "id": 7,
            "name": "Civil Services Prelims",
            "date": "2024-06-16",
            "body": "UPSC",
            "link": "https://upsc.gov.in",
            "app_start": "2024-02-14",
            "app_end": "2024-03-05",
            "app_start_formatted": "14 Feb 2024",
            "app_end_formatted": "05 Mar 2024",
            "exam_date_formatted": "16 Jun 2024"
        }"#;

        let record: ExamRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 6, 16).unwrap());
        assert_eq!(record.app_start_formatted.as_deref(), Some("14 Feb 2024"));
    }

    #[test]
    fn test_deserializes_search_endpoint_record_without_formatted_fields() {
        // The search endpoint sends only the raw fields.
        let json = r#"{
            "id": 3,
            "name": "CGL Tier 1",
            "date": "2024-09-10",
            "body": "SSC",
            "link": null,
            "app_start": null,
            "app_end": null
        }"#;

        let record: ExamRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.link, None);
        assert_eq!(record.app_start, None);
        assert_eq!(record.exam_date_formatted, None);
    }
}
