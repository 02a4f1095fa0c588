use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorBodyDoc { pub error: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueDoc {
    pub id: Uuid,
    pub tasked_user: Option<String>,
    pub issue_level: Option<i64>,
    pub state: Option<String>,
    pub start_date: Option<String>,
    pub finish_date: Option<String>,
}

/// Issue fields accepted on create and full replace; `id` is never accepted.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueInputDoc {
    pub tasked_user: Option<String>,
    pub issue_level: Option<i64>,
    pub state: Option<String>,
    pub start_date: Option<String>,
    pub finish_date: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskedUserInputDoc { pub tasked_user: Option<String> }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneResultDoc { pub inserted_id: Uuid }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::issues::create,
        crate::routes::issues::list_all,
        crate::routes::issues::list_by_tasked_user,
        crate::routes::issues::get_by_id,
        crate::routes::issues::update_tasked_user,
        crate::routes::issues::update_issue,
        crate::routes::issues::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBodyDoc,
            IssueDoc,
            IssueInputDoc,
            TaskedUserInputDoc,
            InsertOneResultDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "issues")
    )
)]
pub struct ApiDoc;
