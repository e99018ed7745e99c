//! Error types for the examcal ecosystem.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in examcal operations.
#[derive(Error, Debug)]
pub enum ExamCalError {
    #[error("Invalid window: end {end} is before start {start}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },

    #[error("Invalid month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    DateFormat(String),
}

/// Result type alias for examcal operations.
pub type ExamCalResult<T> = Result<T, ExamCalError>;
