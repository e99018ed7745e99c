pub mod events;
pub mod month;
pub mod search;
pub mod show;
pub mod stats;
pub mod upcoming;

/// Default horizon for the upcoming listing (days)
pub const DEFAULT_UPCOMING_DAYS: u32 = 90;

/// Most exams the upcoming listing shows
pub const UPCOMING_DISPLAY_CAP: usize = 20;
