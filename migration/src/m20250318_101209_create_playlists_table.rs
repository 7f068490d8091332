use entity::playlists::{self, constraints};
use entity::users;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(playlists::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(playlists::Column::Id).uuid().not_null())
                    .col(ColumnDef::new(playlists::Column::Name).string().not_null())
                    .col(ColumnDef::new(playlists::Column::Description).text())
                    .col(ColumnDef::new(playlists::Column::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(playlists::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(playlists::Column::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(constraints::PK_PLAYLISTS)
                            .col(playlists::Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(constraints::UC_PLAYLISTS_USER_ID_NAME)
                            .col(playlists::Column::UserId)
                            .col(playlists::Column::Name)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(constraints::FK_PLAYLISTS_USER_ID)
                            .from(playlists::Entity, playlists::Column::UserId)
                            .to(users::Entity, users::Column::Id)
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
                    .table(playlists::Entity)
                    .to_owned(),
            )
            .await
    }
}
