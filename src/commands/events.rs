use anyhow::Result;

use examcal_core::ExamWindow;

use crate::client::BackendClient;
use crate::fetch;
use crate::render;

/// Show exams in an arbitrary caller-supplied window. A malformed
/// window (bad date, end before start) fails here, before any request.
pub async fn run(
    client: &BackendClient,
    from: &str,
    to: &str,
    category: Option<&str>,
) -> Result<()> {
    let window = ExamWindow::from_args(from, to)?;

    let buckets = window.month_buckets();
    let spinner = render::create_spinner(format!(
        "Fetching {} month{}",
        buckets.len(),
        if buckets.len() == 1 { "" } else { "s" }
    ));
    let entries = fetch::fetch_events(client, window, category).await;
    spinner.finish_and_clear();

    render::day_list(&entries);

    Ok(())
}
