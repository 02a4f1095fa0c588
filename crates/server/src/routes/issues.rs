use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use models::issue::{self, IssueInput, TaskedUserInput};
use service::issue::InsertOneResult;
use tracing::info;

use crate::{errors::ApiError, routes::ServerState};

#[utoipa::path(
    post, path = "/issue/create", tag = "issues",
    request_body = crate::openapi::IssueInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::InsertOneResultDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<IssueInput>, JsonRejection>,
) -> Result<Json<InsertOneResult>, ApiError> {
    let Json(input) = payload?;
    let ack = state.issues.create(input).await?;
    Ok(Json(ack))
}

#[utoipa::path(
    get, path = "/issues", tag = "issues",
    responses(
        (status = 200, description = "Every issue", body = [crate::openapi::IssueDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn list_all(State(state): State<ServerState>) -> Result<Json<Vec<issue::Model>>, ApiError> {
    let list = state.issues.list_all().await?;
    info!(count = list.len(), "list issues");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/taskedUser/{taskedUser}", tag = "issues",
    params(("taskedUser" = String, Path, description = "Exact assignee name")),
    responses(
        (status = 200, description = "Issues assigned to the user", body = [crate::openapi::IssueDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn list_by_tasked_user(
    State(state): State<ServerState>,
    Path(tasked_user): Path<String>,
) -> Result<Json<Vec<issue::Model>>, ApiError> {
    let list = state.issues.list_by_tasked_user(&tasked_user).await?;
    info!(%tasked_user, count = list.len(), "list issues by tasked user");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/issue/{id}/", tag = "issues",
    params(("id" = String, Path, description = "Issue ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::IssueDoc),
        (status = 400, description = "Malformed ID", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<issue::Model>, ApiError> {
    let found = state.issues.get_by_id(&id).await?;
    Ok(Json(found))
}

#[utoipa::path(
    put, path = "/taskedUser/update/{id}", tag = "issues",
    params(("id" = String, Path, description = "Issue ID")),
    request_body = crate::openapi::TaskedUserInputDoc,
    responses(
        (status = 200, description = "Modified count (0 when the id is unknown)", body = u64),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "Update Failed", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn update_tasked_user(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<TaskedUserInput>, JsonRejection>,
) -> Result<Json<u64>, ApiError> {
    let Json(input) = payload?;
    let modified = state.issues.update_tasked_user(&id, input).await?;
    Ok(Json(modified))
}

#[utoipa::path(
    put, path = "/issue/update/{id}", tag = "issues",
    params(("id" = String, Path, description = "Issue ID")),
    request_body = crate::openapi::IssueInputDoc,
    responses(
        (status = 200, description = "Modified count (0 when the id is unknown)", body = u64),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "Update Failed", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn update_issue(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<IssueInput>, JsonRejection>,
) -> Result<Json<u64>, ApiError> {
    let Json(input) = payload?;
    let modified = state.issues.update_issue(&id, input).await?;
    Ok(Json(modified))
}

#[utoipa::path(
    delete, path = "/issue/delete/{id}", tag = "issues",
    params(("id" = String, Path, description = "Issue ID")),
    responses(
        (status = 200, description = "Deleted count (0 when the id is unknown)", body = u64),
        (status = 400, description = "Malformed ID", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "Delete Failed", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<u64>, ApiError> {
    let deleted = state.issues.delete(&id).await?;
    Ok(Json(deleted))
}
