//! Plan submissions and stored plan records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::date_range::{DateRange, parse_date};
use crate::error::{TripMatchError, TripMatchResult};

/// A plan as submitted by a client, before validation.
///
/// Every field is optional here so that a missing field is reported by
/// [`PlanDraft::validate`] rather than by the JSON decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub want_play: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A draft that passed validation. Only [`ValidatedPlan::into_record`] turns
/// it into a [`PlanRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPlan {
    pub name: String,
    pub city: String,
    pub range: DateRange,
    pub contact: Option<String>,
    pub want_play: bool,
    pub note: Option<String>,
}

/// One user's published travel window and contact info.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub id: String,
    pub name: String,
    pub city: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub contact: Option<String>,
    pub want_play: bool,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PlanDraft {
    /// Check required fields and the date range.
    ///
    /// All missing fields are reported together. Dates are checked only once
    /// every required field is present. Text fields are trimmed, so a
    /// whitespace-only value counts as missing and stored values carry no
    /// surrounding whitespace.
    pub fn validate(&self) -> TripMatchResult<ValidatedPlan> {
        let name = required(&self.name);
        let city = required(&self.city);
        let start = required(&self.start_date);
        let end = required(&self.end_date);

        let (Some(name), Some(city), Some(start), Some(end)) = (name, city, start, end) else {
            let missing = [
                ("name", name.is_none()),
                ("city", city.is_none()),
                ("startDate", start.is_none()),
                ("endDate", end.is_none()),
            ]
            .into_iter()
            .filter_map(|(field, absent)| absent.then_some(field))
            .collect();
            return Err(TripMatchError::MissingFields(missing));
        };

        let range = DateRange::new(parse_date("startDate", start)?, parse_date("endDate", end)?)?;

        Ok(ValidatedPlan {
            name: name.to_string(),
            city: city.to_string(),
            range,
            contact: required(&self.contact).map(str::to_string),
            want_play: self.want_play.unwrap_or(true),
            note: required(&self.note).map(str::to_string),
        })
    }
}

impl ValidatedPlan {
    /// Assign a fresh id and creation time.
    pub fn into_record(self) -> PlanRecord {
        PlanRecord {
            id: uuid::Uuid::new_v4().to_string(),
            name: self.name,
            city: self.city,
            start_date: self.range.start(),
            end_date: self.range.end(),
            contact: self.contact,
            want_play: self.want_play,
            note: self.note,
            created_at: Utc::now(),
        }
    }
}

impl PlanRecord {
    /// The plan's travel window.
    pub fn range(&self) -> DateRange {
        DateRange::spanning(self.start_date, self.end_date)
    }

    /// Whether this plan overlaps the viewer's draft dates.
    pub fn matches(&self, draft: &DateRange) -> bool {
        self.range().overlaps(draft)
    }
}

// Trimmed value of an optional field, None if absent or blank.
fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
