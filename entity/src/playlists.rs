use crate::{playlist_problems, problems, users};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

pub mod constraints {
    pub const PK_PLAYLISTS: &str = "PK_playlists";
    pub const UC_PLAYLISTS_USER_ID_NAME: &str = "UC_playlists_user_id_name";
    pub const FK_PLAYLISTS_USER_ID: &str = "FK_playlists_user_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "playlists")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::User => Entity::belongs_to(users::Entity)
                .from(Column::UserId)
                .to(users::Column::Id)
                .into(),
        }
    }
}

impl Related<problems::Entity> for Entity {
    fn to() -> RelationDef {
        playlist_problems::Relation::Problem.def()
    }

    fn via() -> Option<RelationDef> {
        Some(playlist_problems::Relation::Playlist.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_owner(user_id: Uuid) -> Select<Entity> {
        Self::find().filter(Column::UserId.eq(user_id))
    }

    #[inline]
    pub fn find_by_id_and_owner(id: Uuid, user_id: Uuid) -> Select<Entity> {
        Self::find_by_id(id).filter(Column::UserId.eq(user_id))
    }
}
