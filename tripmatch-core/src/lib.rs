//! Core types for tripmatch.
//!
//! This crate is shared by the server and the CLI:
//! - `plan` for submitted drafts and stored plan records
//! - `date_range` for the inclusive overlap check used to find matches
//! - `store` for the in-memory, append-only list of plans

pub mod config;
pub mod date_range;
pub mod error;
pub mod plan;
pub mod store;

pub use date_range::DateRange;
pub use error::{TripMatchError, TripMatchResult};
pub use plan::{PlanDraft, PlanRecord, ValidatedPlan};
pub use store::PlanStore;
