//! Core types for the examcal ecosystem.
//!
//! This crate provides the I/O-free types shared by the examcal CLI:
//! - `ExamRecord` and `CalendarEntry` for exam data
//! - `MonthBucket` and `ExamWindow` for month-by-month fetching
//! - category color tables and the application-status classifier

pub mod category;
pub mod entry;
pub mod error;
pub mod exam;
pub mod month;
pub mod status;
pub mod window;

pub use entry::{CalendarEntry, EntryColor, EntryDetails};
pub use error::{ExamCalError, ExamCalResult};
pub use exam::ExamRecord;
pub use month::MonthBucket;
pub use status::ApplicationStatus;
pub use window::ExamWindow;
