//! HTTP routes.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use actorpick_domain::Pair;

use crate::app::App;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(index))
        .route("/get_random_actor", get(get_random_actor))
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    actor: &'a str,
    color: &'a str,
}

async fn index(State(app): State<Arc<App>>) -> Result<Html<String>, ApiError> {
    let pair = app.use_cases.selection.pick_pair.execute();
    let page = IndexTemplate {
        actor: &pair.actor,
        color: &pair.color,
    };
    let body = page
        .render()
        .map_err(|e| ApiError::Internal(format!("failed to render index: {e}")))?;
    Ok(Html(body))
}

async fn get_random_actor(State(app): State<Arc<App>>) -> Json<Pair> {
    Json(app.use_cases.selection.pick_pair.execute())
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}
