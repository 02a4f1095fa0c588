use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

pub const MAX_TASKED_USER_LEN: usize = 128;
pub const MAX_STATE_LEN: usize = 64;
pub const MAX_DATE_LEN: usize = 64;

/// A stored issue document. Every field except `id` may be null.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "issue")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub tasked_user: Option<String>,
    pub issue_level: Option<i64>,
    pub state: Option<String>,
    pub start_date: Option<String>,
    pub finish_date: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Caller-supplied issue fields, used by create and full replace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueInput {
    /// Only captured so that a caller-supplied identifier can be rejected.
    #[serde(default, alias = "_id", skip_serializing)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub tasked_user: Option<String>,
    #[serde(default)]
    pub issue_level: Option<i64>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub finish_date: Option<String>,
}

impl IssueInput {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.id.is_some() {
            return Err(ModelError::Validation("id is assigned on creation and cannot be supplied".into()));
        }
        validate_tasked_user(self.tasked_user.as_deref())?;
        validate_label("state", self.state.as_deref(), MAX_STATE_LEN)?;
        validate_len("startDate", self.start_date.as_deref(), MAX_DATE_LEN)?;
        validate_len("finishDate", self.finish_date.as_deref(), MAX_DATE_LEN)?;
        Ok(())
    }

    /// Build the document stored under `id`. Absent fields stay absent.
    pub fn into_model(self, id: Uuid) -> Model {
        Model {
            id,
            tasked_user: self.tasked_user,
            issue_level: self.issue_level,
            state: self.state,
            start_date: self.start_date,
            finish_date: self.finish_date,
        }
    }
}

/// Body of the assignee-only update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskedUserInput {
    #[serde(default)]
    pub tasked_user: Option<String>,
}

impl TaskedUserInput {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_tasked_user(self.tasked_user.as_deref())
    }
}

pub fn validate_tasked_user(u: Option<&str>) -> Result<(), ModelError> {
    validate_label("taskedUser", u, MAX_TASKED_USER_LEN)
}

fn validate_label(field: &str, v: Option<&str>, max: usize) -> Result<(), ModelError> {
    if let Some(s) = v {
        if s.trim().is_empty() {
            return Err(ModelError::Validation(format!("{field} must not be blank")));
        }
    }
    validate_len(field, v, max)
}

fn validate_len(field: &str, v: Option<&str>, max: usize) -> Result<(), ModelError> {
    match v {
        Some(s) if s.chars().count() > max => {
            Err(ModelError::Validation(format!("{field} must be at most {max} characters")))
        }
        _ => Ok(()),
    }
}

/// Parse a path identifier. Malformed input is an error, never a default id.
pub fn parse_issue_id(raw: &str) -> Result<Uuid, ModelError> {
    Uuid::parse_str(raw).map_err(|_| ModelError::Validation(format!("invalid issue id: {raw}")))
}
