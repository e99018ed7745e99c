use anyhow::Result;

use examcal_core::CalendarEntry;

use crate::client::BackendClient;
use crate::commands::UPCOMING_DISPLAY_CAP;
use crate::render;

/// List exams coming up within the next `days` days, capped like the
/// backend's landing page. The backend returns these sorted by date.
pub async fn run(client: &BackendClient, days: u32, category: Option<&str>) -> Result<()> {
    let mut exams = client.search_exams(None, category, Some(days)).await?;
    exams.truncate(UPCOMING_DISPLAY_CAP);

    let entries: Vec<CalendarEntry> = exams.into_iter().map(CalendarEntry::from_record).collect();
    render::day_list(&entries);

    Ok(())
}
