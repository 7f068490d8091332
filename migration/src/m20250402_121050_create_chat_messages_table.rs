use entity::chat_messages::{self, constraints};
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
                    .table(chat_messages::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(chat_messages::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(chat_messages::Column::UserId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(chat_messages::Column::ProblemId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(chat_messages::Column::Message)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(chat_messages::Column::Response)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(chat_messages::Column::MessageType)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(chat_messages::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(constraints::PK_CHAT_MESSAGES)
                            .col(chat_messages::Column::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(constraints::FK_CHAT_MESSAGES_USER_ID)
                            .from(chat_messages::Entity, chat_messages::Column::UserId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(constraints::FK_CHAT_MESSAGES_PROBLEM_ID)
                            .from(chat_messages::Entity, chat_messages::Column::ProblemId)
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
                    .table(chat_messages::Entity)
                    .to_owned(),
            )
            .await
    }
}
