//! Error types for tripmatch.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in tripmatch operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TripMatchError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid date '{value}' for {field}. Expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    #[error("End date {end} is earlier than start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TripMatchError {
    /// True for errors caused by what the caller submitted, as opposed to
    /// the service's own setup.
    pub fn is_validation(&self) -> bool {
        !matches!(self, TripMatchError::Config(_))
    }
}

/// Result type alias for tripmatch operations.
pub type TripMatchResult<T> = Result<T, TripMatchError>;
