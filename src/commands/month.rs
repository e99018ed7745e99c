use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;

use examcal_core::ExamWindow;

use crate::client::BackendClient;
use crate::fetch;
use crate::render;

/// Show the calendar for one month: the month's grid window (padded to
/// whole weeks, Monday first) fetched and rendered as a day list.
pub async fn run(
    client: &BackendClient,
    year: Option<i32>,
    month: Option<u32>,
    category: Option<&str>,
) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let year = year.unwrap_or_else(|| today.year());
    let month = month.unwrap_or_else(|| today.month());

    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow::anyhow!("Invalid month: {}-{}", year, month))?;
    let window = ExamWindow::month_grid(year, month)?;

    let spinner = render::create_spinner(format!("Fetching {}", first.format("%B %Y")));
    let entries = fetch::fetch_events(client, window, category).await;
    spinner.finish_and_clear();

    println!("{}", first.format("%B %Y").to_string().bold());
    println!();
    render::day_list(&entries);

    Ok(())
}
