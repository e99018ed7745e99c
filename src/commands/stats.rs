use anyhow::Result;
use owo_colors::OwoColorize;

use crate::client::BackendClient;
use crate::render;

/// Show backend exam statistics.
pub async fn run(client: &BackendClient) -> Result<()> {
    let stats = client.stats().await?;

    println!("{}", "Exam statistics".bold());
    println!("  Total exams:    {}", stats.total_exams);
    println!("  Upcoming:       {}", stats.upcoming_exams);
    println!("  This month:     {}", stats.this_month_exams);

    if !stats.body_stats.is_empty() {
        println!();
        println!("{}", "Upcoming by conducting body".bold());

        // Busiest bodies first, ties alphabetical
        let mut bodies: Vec<_> = stats.body_stats.iter().collect();
        bodies.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));

        for (body, count) in bodies {
            println!("  {:>4}  {}", count, render::category_tag(body));
        }
    }

    Ok(())
}
