use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Issue: lookups by assignee
        manager
            .create_index(
                Index::create()
                    .name("idx_issue_tasked_user")
                    .table(Issue::Table)
                    .col(Issue::TaskedUser)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_issue_tasked_user").table(Issue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Issue { Table, TaskedUser }
