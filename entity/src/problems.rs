use crate::{playlist_problems, playlists};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod constraints {
    pub const PK_PROBLEMS: &str = "PK_problems";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "problems")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub difficulty: Difficulty,
    pub tags: Json,
    pub examples: Json,
    pub test_cases: Json,
    pub start_code: Json,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(EnumIter, DeriveActiveEnum, PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
pub enum Difficulty {
    #[sea_orm(string_value = "EASY")]
    #[serde(rename = "EASY")]
    Easy,
    #[sea_orm(string_value = "MEDIUM")]
    #[serde(rename = "MEDIUM")]
    Medium,
    #[sea_orm(string_value = "HARD")]
    #[serde(rename = "HARD")]
    Hard,
}

/// One judgeable test case, stored inside the `test_cases` json column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub output: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<playlists::Entity> for Entity {
    fn to() -> RelationDef {
        playlist_problems::Relation::Playlist.def()
    }

    fn via() -> Option<RelationDef> {
        Some(playlist_problems::Relation::Problem.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
