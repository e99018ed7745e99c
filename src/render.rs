//! Terminal rendering for exam calendar entries.
//!
//! Extension traits add colored rendering to examcal-core types using
//! owo_colors; the core crate itself stays display-agnostic.

use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use examcal_core::category::{self, BadgeStyle};
use examcal_core::{ApplicationStatus, CalendarEntry};

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for CalendarEntry {
    fn render(&self) -> String {
        format!("{} {}", self.title, category_tag(&self.details.body))
    }
}

/// The colored `[BODY]` tag for a conducting body.
pub fn category_tag(body: &str) -> String {
    paint_badge(category::badge_style(body), &format!("[{}]", body))
}

/// Colorize text according to the category badge style.
fn paint_badge(style: BadgeStyle, text: &str) -> String {
    match style {
        BadgeStyle::Primary => text.blue().to_string(),
        BadgeStyle::Success => text.green().to_string(),
        BadgeStyle::Info => text.cyan().to_string(),
        BadgeStyle::Warning => text.yellow().to_string(),
        BadgeStyle::Danger => text.red().to_string(),
        BadgeStyle::Dark => text.bright_black().to_string(),
        BadgeStyle::Secondary => text.dimmed().to_string(),
    }
}

/// Print entries grouped by day, earliest day first.
pub fn day_list(entries: &[CalendarEntry]) {
    if entries.is_empty() {
        println!("{}", "No exams found".dimmed());
        return;
    }

    let mut sorted: Vec<&CalendarEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.date);

    let mut current_date: Option<NaiveDate> = None;

    for entry in sorted {
        if current_date != Some(entry.date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", format_date_label(entry.date).bold());
            current_date = Some(entry.date);
        }

        println!("  {}", entry.render());
    }
}

/// Print the detail card for one entry (the calendar's click-through
/// view). Works entirely off the entry's carried metadata; no network.
pub fn detail_card(entry: &CalendarEntry, now: NaiveDate) {
    let details = &entry.details;

    println!("{}", entry.title.bold());
    println!();
    println!(
        "  {} {}",
        "Conducting body:".dimmed(),
        paint_badge(category::badge_style(&details.body), &details.body)
    );

    let exam_date = details
        .exam_date_formatted
        .clone()
        .unwrap_or_else(|| entry.date.format("%d %b %Y").to_string());
    println!("  {} {}", "Exam date:".dimmed(), exam_date.green().bold());

    println!(
        "  {} {}",
        "Application start:".dimmed(),
        details.app_start_formatted.as_deref().unwrap_or("Not Available")
    );
    println!(
        "  {} {}",
        "Application deadline:".dimmed(),
        details.app_end_formatted.as_deref().unwrap_or("Not Available")
    );

    println!();
    let status = ApplicationStatus::classify(now, details.app_start, details.app_end);
    println!("  {}", render_status(status));

    if let Some(link) = &details.link {
        println!();
        println!("  {} {}", "Official notification:".dimmed(), link.underline());
    }
}

/// One status line per application-window state.
fn render_status(status: ApplicationStatus) -> String {
    match status {
        ApplicationStatus::Unannounced => {
            "Application dates not yet announced. Keep checking the official website."
                .yellow()
                .to_string()
        }
        ApplicationStatus::Upcoming { days_until_open } => {
            format!("Applications open in {} day(s)", days_until_open)
                .cyan()
                .to_string()
        }
        ApplicationStatus::Open { days_left } => {
            format!("Applications are OPEN! {} day(s) left to apply", days_left)
                .green()
                .bold()
                .to_string()
        }
        ApplicationStatus::Closed => "Application deadline has passed".red().to_string(),
    }
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
fn format_date_label(date: NaiveDate) -> String {
    let today = chrono::Local::now().date_naive();

    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// Spinner shown while month buckets load.
pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("{msg} {spinner}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
