//! The browser form

use axum::{Router, response::Html, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// GET / - Plan form and list of published plans
async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}
