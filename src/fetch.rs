//! Fetch-and-assemble: turn a visible window into calendar entries.

use examcal_core::{CalendarEntry, ExamWindow};

use crate::client::BackendClient;

/// Fetch all exams visible in `window` and assemble them into calendar
/// entries, one backend request per month bucket, awaited in order.
///
/// Each bucket is an independent attempt: a transport failure or
/// non-success status is logged and that bucket contributes nothing,
/// while the remaining buckets still load. Partial results are better
/// than none here since the caller renders whatever months succeeded.
///
/// Records outside the window are dropped even when the backend
/// returns them (a bucket covers a whole month, the window usually
/// does not), so every returned entry satisfies
/// `window.contains(entry.date)`. Entries keep bucket order; nothing
/// is sorted or deduplicated across buckets because buckets do not
/// overlap.
pub async fn fetch_events(
    client: &BackendClient,
    window: ExamWindow,
    category: Option<&str>,
) -> Vec<CalendarEntry> {
    let mut entries = Vec::new();

    for bucket in window.month_buckets() {
        let records = match client.month_exams(bucket, category).await {
            Ok(records) => records,
            Err(e) => {
                log::warn!("Skipping {}: {:#}", bucket, e);
                continue;
            }
        };

        log::debug!("{}: {} exams fetched", bucket, records.len());

        entries.extend(
            records
                .into_iter()
                .filter(|record| window.contains(record.date))
                .map(CalendarEntry::from_record),
        );
    }

    entries
}
