use crate::{playlists, problems};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

pub mod constraints {
    pub const PK_PLAYLIST_PROBLEMS: &str = "PK_playlist_problems";
    pub const FK_PLAYLIST_PROBLEMS_PLAYLIST_ID: &str = "FK_playlist_problems_playlist_id";
    pub const FK_PLAYLIST_PROBLEMS_PROBLEM_ID: &str = "FK_playlist_problems_problem_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "playlist_problems")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub playlist_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub problem_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Playlist,
    Problem,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Playlist => Entity::belongs_to(playlists::Entity)
                .from(Column::PlaylistId)
                .to(playlists::Column::Id)
                .into(),
            Self::Problem => Entity::belongs_to(problems::Entity)
                .from(Column::ProblemId)
                .to(problems::Column::Id)
                .into(),
        }
    }
}

impl Related<playlists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Playlist.def()
    }
}

impl Related<problems::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Problem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_playlist(playlist_id: Uuid) -> Select<Entity> {
        Self::find().filter(Column::PlaylistId.eq(playlist_id))
    }
}
