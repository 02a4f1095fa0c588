use std::{future::Future, sync::Arc, time::Duration};

use models::issue::{self, IssueInput, TaskedUserInput};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::issue::repository::{InsertOneResult, IssueRepository};

/// Budget applied to every store call unless configured otherwise.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(100);

/// Issue access service: validates a request, then performs exactly one
/// repository call under the configured time budget.
///
/// The repository is injected at construction and shared by all requests;
/// the service holds no other state.
#[derive(Clone)]
pub struct IssueService {
    repo: Arc<dyn IssueRepository>,
    budget: Duration,
}

impl IssueService {
    pub fn new(repo: Arc<dyn IssueRepository>) -> Self {
        Self { repo, budget: DEFAULT_REQUEST_TIMEOUT }
    }

    pub fn with_timeout(mut self, budget: Duration) -> Self {
        self.budget = budget;
        self
    }

    pub fn timeout(&self) -> Duration { self.budget }

    /// Run one store call inside the budget. The timer lives only as long as
    /// this future, so it is released on success, failure, or expiry alike.
    async fn scoped<T, F>(&self, op: &'static str, fut: F) -> Result<T, ServiceError>
    where
        F: Future<Output = Result<T, ServiceError>>,
    {
        match tokio::time::timeout(self.budget, fut).await {
            Ok(res) => res,
            Err(_) => {
                warn!(op, budget_ms = self.budget.as_millis() as u64, "issue store call timed out");
                Err(ServiceError::Timeout(self.budget))
            }
        }
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: IssueInput) -> Result<InsertOneResult, ServiceError> {
        input.validate()?;
        let doc = input.into_model(Uuid::new_v4());
        let ack = self.scoped("create", self.repo.insert(doc)).await?;
        info!(id = %ack.inserted_id, "issue_created");
        Ok(ack)
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<issue::Model>, ServiceError> {
        let docs = self.scoped("list_all", self.repo.find_all()).await?;
        debug!(count = docs.len(), "issues_listed");
        Ok(docs)
    }

    #[instrument(skip(self))]
    pub async fn list_by_tasked_user(&self, tasked_user: &str) -> Result<Vec<issue::Model>, ServiceError> {
        let docs = self.scoped("list_by_tasked_user", self.repo.find_by_tasked_user(tasked_user)).await?;
        debug!(count = docs.len(), "issues_listed_by_tasked_user");
        Ok(docs)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<issue::Model, ServiceError> {
        let id = issue::parse_issue_id(id)?;
        self.scoped("get_by_id", self.repo.find_by_id(id))
            .await?
            .ok_or_else(|| ServiceError::not_found("issue", id))
    }

    /// Set only the assignee. An unknown id is not an error: the count is 0.
    #[instrument(skip(self, input))]
    pub async fn update_tasked_user(&self, id: &str, input: TaskedUserInput) -> Result<u64, ServiceError> {
        let id = issue::parse_issue_id(id)?;
        input.validate()?;
        let modified = self.scoped("update_tasked_user", self.repo.set_tasked_user(id, input.tasked_user)).await?;
        info!(%id, modified, "issue_tasked_user_updated");
        Ok(modified)
    }

    /// Replace every field; fields missing from `input` are stored as null.
    #[instrument(skip(self, input))]
    pub async fn update_issue(&self, id: &str, input: IssueInput) -> Result<u64, ServiceError> {
        let id = issue::parse_issue_id(id)?;
        input.validate()?;
        let modified = self.scoped("update_issue", self.repo.replace(input.into_model(id))).await?;
        info!(%id, modified, "issue_replaced");
        Ok(modified)
    }

    /// Deleting an unknown id is a no-op that reports 0.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<u64, ServiceError> {
        let id = issue::parse_issue_id(id)?;
        let deleted = self.scoped("delete", self.repo.delete(id)).await?;
        info!(%id, deleted, "issue_deleted");
        Ok(deleted)
    }
}
