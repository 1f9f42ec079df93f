use tripmatch_core::PlanStore;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    // Plans live only as long as the process
    pub store: PlanStore,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            store: PlanStore::new(),
        }
    }
}
