//! Plan endpoints

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;

use tripmatch_core::{DateRange, PlanDraft, PlanRecord, TripMatchError};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/plans", get(list_plans).post(create_plan))
        .route("/plans/matches", get(matching_plans))
}

/// GET /plans - List every published plan, oldest first
async fn list_plans(State(state): State<AppState>) -> Json<Vec<PlanRecord>> {
    Json(state.store.list())
}

/// POST /plans - Publish a new plan
async fn create_plan(
    State(state): State<AppState>,
    payload: Result<Json<PlanDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<PlanRecord>), AppError> {
    let Json(draft) = payload.map_err(|e| TripMatchError::InvalidBody(e.body_text()))?;

    let record = state.store.append(&draft)?;
    tracing::info!(
        id = %record.id,
        city = %record.city,
        start = %record.start_date,
        end = %record.end_date,
        "Published plan"
    );

    Ok((StatusCode::CREATED, Json(record)))
}

/// Query string for the match lookup
#[derive(Deserialize)]
pub struct MatchQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// GET /plans/matches?start=..&end=.. - Plans overlapping the given dates
async fn matching_plans(
    State(state): State<AppState>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<Vec<PlanRecord>>, AppError> {
    let (Some(start), Some(end)) = (query.start.as_deref(), query.end.as_deref()) else {
        let missing = [("start", query.start.is_none()), ("end", query.end.is_none())]
            .into_iter()
            .filter_map(|(field, absent)| absent.then_some(field))
            .collect();
        return Err(TripMatchError::MissingFields(missing).into());
    };

    let range = DateRange::parse(start, end)?;
    Ok(Json(state.store.matching(&range)))
}
