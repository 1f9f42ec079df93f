//! In-memory, append-only plan store.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::date_range::DateRange;
use crate::error::TripMatchResult;
use crate::plan::{PlanDraft, PlanRecord};

/// Ordered list of published plans, kept for the life of the process.
///
/// Clones share the same list.
#[derive(Clone, Default)]
pub struct PlanStore {
    plans: Arc<RwLock<Vec<PlanRecord>>>,
}

impl PlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `draft`, give it an id and creation time, and append it.
    /// Nothing is stored when validation fails.
    pub fn append(&self, draft: &PlanDraft) -> TripMatchResult<PlanRecord> {
        let record = draft.validate()?.into_record();
        self.plans.write().push(record.clone());

        tracing::debug!(id = %record.id, city = %record.city, "Stored plan");
        Ok(record)
    }

    /// Snapshot of every plan in insertion order.
    pub fn list(&self) -> Vec<PlanRecord> {
        self.plans.read().clone()
    }

    /// Plans overlapping `range`, in insertion order.
    pub fn matching(&self, range: &DateRange) -> Vec<PlanRecord> {
        self.plans
            .read()
            .iter()
            .filter(|plan| plan.matches(range))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.plans.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.read().is_empty()
    }
}
