//! Create `issue` table.
//!
//! One row per issue document; every data column is nullable.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Issue::Table)
                    .if_not_exists()
                    .col(uuid(Issue::Id).primary_key())
                    .col(string_len_null(Issue::TaskedUser, 128))
                    .col(big_integer_null(Issue::IssueLevel))
                    .col(string_len_null(Issue::State, 64))
                    .col(string_len_null(Issue::StartDate, 64))
                    .col(string_len_null(Issue::FinishDate, 64))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Issue::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Issue { Table, Id, TaskedUser, IssueLevel, State, StartDate, FinishDate }
