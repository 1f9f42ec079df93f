//! Inclusive calendar date ranges and the overlap check used for matching.

use chrono::NaiveDate;

use crate::error::{TripMatchError, TripMatchResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A closed interval of calendar dates, `[start, end]`.
/// `start <= end` always holds for a constructed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> TripMatchResult<Self> {
        if start > end {
            return Err(TripMatchError::InvalidRange { start, end });
        }
        Ok(DateRange { start, end })
    }

    /// The smallest range covering both dates, whichever order they come in.
    pub fn spanning(a: NaiveDate, b: NaiveDate) -> Self {
        DateRange {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Parse two YYYY-MM-DD strings into a range.
    pub fn parse(start: &str, end: &str) -> TripMatchResult<Self> {
        let start = parse_date("start", start)?;
        let end = parse_date("end", end)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether two ranges share at least one day. Boundaries are inclusive,
    /// so ranges that touch on a single day overlap.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Number of days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Parse a YYYY-MM-DD string, naming `field` in the error.
pub fn parse_date(field: &'static str, value: &str) -> TripMatchResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| TripMatchError::InvalidDate {
        field,
        value: value.to_string(),
    })
}
