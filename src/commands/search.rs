use anyhow::Result;

use examcal_core::CalendarEntry;

use crate::client::BackendClient;
use crate::render;

/// Search exams by name, optionally bounded to a days horizon.
pub async fn run(
    client: &BackendClient,
    query: &str,
    category: Option<&str>,
    days: Option<u32>,
) -> Result<()> {
    let exams = client.search_exams(Some(query), category, days).await?;

    let entries: Vec<CalendarEntry> = exams.into_iter().map(CalendarEntry::from_record).collect();
    render::day_list(&entries);

    Ok(())
}
