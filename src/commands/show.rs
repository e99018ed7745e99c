use anyhow::Result;
use chrono::Datelike;

use examcal_core::{CalendarEntry, MonthBucket};

use crate::client::BackendClient;
use crate::render;

/// Show the full detail card for one exam, identified by backend id.
///
/// The exam's month is fetched (defaulting to the current month) to
/// obtain the entry; the card itself renders purely from the entry's
/// carried metadata.
pub async fn run(
    client: &BackendClient,
    id: i64,
    year: Option<i32>,
    month: Option<u32>,
) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let bucket = MonthBucket::new(
        year.unwrap_or_else(|| today.year()),
        month.unwrap_or_else(|| today.month()),
    );

    let exams = client.month_exams(bucket, None).await?;
    let record = exams
        .into_iter()
        .find(|exam| exam.id == id)
        .ok_or_else(|| anyhow::anyhow!("Exam {} not found in {}", id, bucket))?;

    let entry = CalendarEntry::from_record(record);
    render::detail_card(&entry, today);

    Ok(())
}
