//! Category color and badge lookups.
//!
//! Both tables are static maps keyed on the conducting-body string,
//! with a fixed fallback for categories the tables do not know.

use crate::entry::EntryColor;

/// Fill color for categories without a dedicated entry color.
pub const DEFAULT_FILL: &str = "#6c757d";

/// Entries always render white text on their fill color.
const ENTRY_TEXT: &str = "#ffffff";

/// The color pair an entry for this category is rendered with.
pub fn event_color(body: &str) -> EntryColor {
    let fill = match body {
        "UPSC" => "#28a745",
        "SSC" => "#007bff",
        "IBPS" => "#dc3545",
        "SBI" => "#fd7e14",
        "RAILWAY" => "#6f42c1",
        "BANKING" => "#20c997",
        "DEFENCE" => "#e83e8c",
        "POLICE" => "#6c757d",
        "TEACHING" => "#17a2b8",
        "MEDICAL" => "#ffc107",
        "ENGINEERING" => "#343a40",
        "STATE_PSC" => "#795548",
        "OTHER" => "#607d8b",
        _ => DEFAULT_FILL,
    };

    EntryColor {
        fill,
        text: ENTRY_TEXT,
    }
}

/// Styling for the category badge in the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Primary,
    Success,
    Info,
    Warning,
    Danger,
    Dark,
    Secondary,
}

/// The badge style for a conducting body. Unknown bodies get the
/// default secondary badge.
pub fn badge_style(body: &str) -> BadgeStyle {
    match body {
        "UPSC" | "DEFENCE" | "BANKING" => BadgeStyle::Primary,
        "SSC" | "MEDICAL" => BadgeStyle::Success,
        "IBPS" | "ENGINEERING" => BadgeStyle::Info,
        "SBI" | "STATE_PSC" => BadgeStyle::Warning,
        "RAILWAY" => BadgeStyle::Danger,
        "POLICE" => BadgeStyle::Dark,
        _ => BadgeStyle::Secondary,
    }
}
