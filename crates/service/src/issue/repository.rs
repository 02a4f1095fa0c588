use async_trait::async_trait;
use models::issue::{self, Entity as IssueEntity};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, Value,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Acknowledgment returned by the store after an insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneResult {
    pub inserted_id: Uuid,
}

/// Document store contract for issues. Each method is a single store call.
///
/// Counts returned by `set_tasked_user` and `replace` are the number of
/// documents whose stored fields changed: 0 for an unknown `id` and 0 when the
/// write leaves the document as it was. `delete` counts removed documents.
#[async_trait]
pub trait IssueRepository: Send + Sync {
    async fn insert(&self, doc: issue::Model) -> Result<InsertOneResult, ServiceError>;
    async fn find_all(&self) -> Result<Vec<issue::Model>, ServiceError>;
    async fn find_by_tasked_user(&self, tasked_user: &str) -> Result<Vec<issue::Model>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<issue::Model>, ServiceError>;
    /// Write `tasked_user` only; every other field keeps its value.
    async fn set_tasked_user(&self, id: Uuid, tasked_user: Option<String>) -> Result<u64, ServiceError>;
    /// Overwrite every data field of `doc.id` with `doc`, nulls included.
    async fn replace(&self, doc: issue::Model) -> Result<u64, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmIssueRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmIssueRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

/// Rows where `col` holds something other than `value`, NULL-aware.
fn differs<V: Into<Value>>(col: issue::Column, value: Option<V>) -> Condition {
    match value {
        Some(v) => Condition::any().add(col.ne(v)).add(col.is_null()),
        None => Condition::all().add(col.is_not_null()),
    }
}

#[async_trait]
impl IssueRepository for SeaOrmIssueRepository {
    async fn insert(&self, doc: issue::Model) -> Result<InsertOneResult, ServiceError> {
        let am: issue::ActiveModel = doc.into();
        let created = am.insert(&self.db).await.map_err(ServiceError::persistence)?;
        Ok(InsertOneResult { inserted_id: created.id })
    }

    async fn find_all(&self) -> Result<Vec<issue::Model>, ServiceError> {
        IssueEntity::find().all(&self.db).await.map_err(ServiceError::persistence)
    }

    async fn find_by_tasked_user(&self, tasked_user: &str) -> Result<Vec<issue::Model>, ServiceError> {
        IssueEntity::find()
            .filter(issue::Column::TaskedUser.eq(tasked_user))
            .all(&self.db)
            .await
            .map_err(ServiceError::persistence)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<issue::Model>, ServiceError> {
        IssueEntity::find_by_id(id).one(&self.db).await.map_err(ServiceError::persistence)
    }

    async fn set_tasked_user(&self, id: Uuid, tasked_user: Option<String>) -> Result<u64, ServiceError> {
        let changed = differs(issue::Column::TaskedUser, tasked_user.clone());
        let res = IssueEntity::update_many()
            .col_expr(issue::Column::TaskedUser, Expr::value(tasked_user))
            .filter(issue::Column::Id.eq(id))
            .filter(changed)
            .exec(&self.db)
            .await
            .map_err(ServiceError::persistence)?;
        Ok(res.rows_affected)
    }

    async fn replace(&self, doc: issue::Model) -> Result<u64, ServiceError> {
        let changed = Condition::any()
            .add(differs(issue::Column::TaskedUser, doc.tasked_user.clone()))
            .add(differs(issue::Column::IssueLevel, doc.issue_level))
            .add(differs(issue::Column::State, doc.state.clone()))
            .add(differs(issue::Column::StartDate, doc.start_date.clone()))
            .add(differs(issue::Column::FinishDate, doc.finish_date.clone()));
        let res = IssueEntity::update_many()
            .col_expr(issue::Column::TaskedUser, Expr::value(doc.tasked_user))
            .col_expr(issue::Column::IssueLevel, Expr::value(doc.issue_level))
            .col_expr(issue::Column::State, Expr::value(doc.state))
            .col_expr(issue::Column::StartDate, Expr::value(doc.start_date))
            .col_expr(issue::Column::FinishDate, Expr::value(doc.finish_date))
            .filter(issue::Column::Id.eq(doc.id))
            .filter(changed)
            .exec(&self.db)
            .await
            .map_err(ServiceError::persistence)?;
        Ok(res.rows_affected)
    }

    async fn delete(&self, id: Uuid) -> Result<u64, ServiceError> {
        let res = IssueEntity::delete_by_id(id).exec(&self.db).await.map_err(ServiceError::persistence)?;
        Ok(res.rows_affected)
    }
}

/// Process-local repository with the same semantics as the SeaORM one.
pub mod memory {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct InMemoryIssueRepository {
        docs: RwLock<HashMap<Uuid, issue::Model>>,
    }

    impl InMemoryIssueRepository {
        pub fn new() -> Self { Self::default() }
    }

    #[async_trait]
    impl IssueRepository for InMemoryIssueRepository {
        async fn insert(&self, doc: issue::Model) -> Result<InsertOneResult, ServiceError> {
            let mut docs = self.docs.write().await;
            if docs.contains_key(&doc.id) {
                return Err(ServiceError::Persistence(format!("duplicate key: {}", doc.id)));
            }
            let inserted_id = doc.id;
            docs.insert(inserted_id, doc);
            Ok(InsertOneResult { inserted_id })
        }

        async fn find_all(&self) -> Result<Vec<issue::Model>, ServiceError> {
            Ok(self.docs.read().await.values().cloned().collect())
        }

        async fn find_by_tasked_user(&self, tasked_user: &str) -> Result<Vec<issue::Model>, ServiceError> {
            let docs = self.docs.read().await;
            Ok(docs
                .values()
                .filter(|d| d.tasked_user.as_deref() == Some(tasked_user))
                .cloned()
                .collect())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<issue::Model>, ServiceError> {
            Ok(self.docs.read().await.get(&id).cloned())
        }

        async fn set_tasked_user(&self, id: Uuid, tasked_user: Option<String>) -> Result<u64, ServiceError> {
            let mut docs = self.docs.write().await;
            match docs.get_mut(&id) {
                Some(doc) if doc.tasked_user == tasked_user => Ok(0),
                Some(doc) => {
                    doc.tasked_user = tasked_user;
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        async fn replace(&self, doc: issue::Model) -> Result<u64, ServiceError> {
            let mut docs = self.docs.write().await;
            match docs.get_mut(&doc.id) {
                Some(slot) if *slot == doc => Ok(0),
                Some(slot) => {
                    *slot = doc;
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        async fn delete(&self, id: Uuid) -> Result<u64, ServiceError> {
            Ok(u64::from(self.docs.write().await.remove(&id).is_some()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sqlite_repo;
    use models::issue::IssueInput;

    fn doc(user: &str, level: i64) -> issue::Model {
        IssueInput {
            tasked_user: Some(user.into()),
            issue_level: Some(level),
            state: Some("open".into()),
            start_date: Some("2024-03-01".into()),
            finish_date: Some("2024-03-08".into()),
            ..Default::default()
        }
        .into_model(Uuid::new_v4())
    }

    async fn exercise(repo: &dyn IssueRepository) -> anyhow::Result<()> {
        let a = doc("alice", 1);
        let b = doc("bob", 2);
        assert_eq!(repo.insert(a.clone()).await?.inserted_id, a.id);
        repo.insert(b.clone()).await?;

        assert_eq!(repo.find_all().await?.len(), 2);
        assert_eq!(repo.find_by_tasked_user("alice").await?, vec![a.clone()]);
        assert!(repo.find_by_tasked_user("Alice").await?.is_empty());
        assert!(repo.find_by_tasked_user("ali").await?.is_empty());

        // partial update touches only the assignee
        assert_eq!(repo.set_tasked_user(a.id, Some("carol".into())).await?, 1);
        let after = repo.find_by_id(a.id).await?.unwrap();
        assert_eq!(after, issue::Model { tasked_user: Some("carol".into()), ..a.clone() });

        // full replace nulls out omitted fields
        let replacement = IssueInput { state: Some("closed".into()), ..Default::default() }.into_model(b.id);
        assert_eq!(repo.replace(replacement.clone()).await?, 1);
        assert_eq!(repo.find_by_id(b.id).await?, Some(replacement.clone()));

        // writes that change nothing count as 0 modified
        assert_eq!(repo.set_tasked_user(a.id, Some("carol".into())).await?, 0);
        assert_eq!(repo.set_tasked_user(b.id, None).await?, 0);
        assert_eq!(repo.replace(replacement.clone()).await?, 0);
        let level_only = issue::Model { issue_level: Some(i64::from(i32::MAX) + 1), ..replacement };
        assert_eq!(repo.replace(level_only.clone()).await?, 1);
        assert_eq!(repo.find_by_id(b.id).await?, Some(level_only));

        let missing = Uuid::new_v4();
        assert_eq!(repo.set_tasked_user(missing, Some("x".into())).await?, 0);
        assert_eq!(repo.replace(doc("x", 1)).await?, 0);
        assert_eq!(repo.delete(missing).await?, 0);

        assert_eq!(repo.delete(a.id).await?, 1);
        assert!(repo.find_by_id(a.id).await?.is_none());
        assert_eq!(repo.delete(a.id).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn in_memory_repository_semantics() -> anyhow::Result<()> {
        exercise(&memory::InMemoryIssueRepository::new()).await
    }

    #[tokio::test]
    async fn seaorm_repository_semantics() -> anyhow::Result<()> {
        let repo = sqlite_repo().await?;
        exercise(&repo).await
    }

    #[tokio::test]
    async fn in_memory_rejects_duplicate_id() -> anyhow::Result<()> {
        let repo = memory::InMemoryIssueRepository::new();
        let d = doc("alice", 1);
        repo.insert(d.clone()).await?;
        assert!(matches!(repo.insert(d).await, Err(ServiceError::Persistence(_))));
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_rejects_duplicate_id() -> anyhow::Result<()> {
        let repo = sqlite_repo().await?;
        let d = doc("alice", 1);
        repo.insert(d.clone()).await?;
        assert!(matches!(repo.insert(d).await, Err(ServiceError::Persistence(_))));
        Ok(())
    }
}
