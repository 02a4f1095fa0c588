use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::issue::IssueService;

use crate::openapi::ApiDoc;

pub mod issues;

/// Shared handler state: one issue service for every request.
#[derive(Clone)]
pub struct ServerState {
    pub issues: Arc<IssueService>,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: issue endpoints, health, and API docs
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let issue_routes = Router::new()
        .route("/issue/create", post(issues::create))
        .route("/issues", get(issues::list_all))
        .route("/taskedUser/:taskedUser", get(issues::list_by_tasked_user))
        .route("/issue/:id/", get(issues::get_by_id))
        .route("/issue/:id", get(issues::get_by_id))
        .route("/taskedUser/update/:id", put(issues::update_tasked_user))
        .route("/issue/update/:id", put(issues::update_issue))
        .route("/issue/delete/:id", delete(issues::delete));

    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    public
        .merge(issue_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
