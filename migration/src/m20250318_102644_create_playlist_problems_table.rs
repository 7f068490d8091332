use entity::playlist_problems::{self, constraints};
use entity::{playlists, problems};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(playlist_problems::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(playlist_problems::Column::PlaylistId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(playlist_problems::Column::ProblemId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(constraints::PK_PLAYLIST_PROBLEMS)
                            .col(playlist_problems::Column::PlaylistId)
                            .col(playlist_problems::Column::ProblemId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(constraints::FK_PLAYLIST_PROBLEMS_PLAYLIST_ID)
                            .from(
                                playlist_problems::Entity,
                                playlist_problems::Column::PlaylistId,
                            )
                            .to(playlists::Entity, playlists::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(constraints::FK_PLAYLIST_PROBLEMS_PROBLEM_ID)
                            .from(
                                playlist_problems::Entity,
                                playlist_problems::Column::ProblemId,
                            )
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
                    .table(playlist_problems::Entity)
                    .to_owned(),
            )
            .await
    }
}
