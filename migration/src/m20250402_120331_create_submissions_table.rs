use entity::submissions::{self, constraints};
use entity::{problems, users};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(submissions::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(submissions::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(submissions::Column::UserId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(submissions::Column::ProblemId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(submissions::Column::Language)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(submissions::Column::SourceCode)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(submissions::Column::Status)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(submissions::Column::Results).json().not_null())
                    .col(
                        ColumnDef::new(submissions::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(constraints::PK_SUBMISSIONS)
                            .col(submissions::Column::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(constraints::FK_SUBMISSIONS_USER_ID)
                            .from(submissions::Entity, submissions::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(constraints::FK_SUBMISSIONS_PROBLEM_ID)
                            .from(submissions::Entity, submissions::Column::ProblemId)
                            .to(problems::Entity, problems::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(submissions::Entity)
                    .to_owned(),
            )
            .await
    }
}
