use crate::{problems, users};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod constraints {
    pub const PK_SUBMISSIONS: &str = "PK_submissions";
    pub const FK_SUBMISSIONS_USER_ID: &str = "FK_submissions_user_id";
    pub const FK_SUBMISSIONS_PROBLEM_ID: &str = "FK_submissions_problem_id";
}

/// Append-only record of one judged submission. Rows are never updated.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub problem_id: Uuid,
    pub language: String,
    #[sea_orm(column_type = "Text")]
    pub source_code: String,
    pub status: Verdict,
    pub results: Json,
    pub created_at: DateTimeUtc,
}

#[derive(EnumIter, DeriveActiveEnum, PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
pub enum Verdict {
    #[sea_orm(string_value = "Accepted")]
    Accepted,
    #[sea_orm(string_value = "Wrong Answer")]
    #[serde(rename = "Wrong Answer")]
    WrongAnswer,
    #[sea_orm(string_value = "Error")]
    Error,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Problem,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::User => Entity::belongs_to(users::Entity)
                .from(Column::UserId)
                .to(users::Column::Id)
                .into(),
            Self::Problem => Entity::belongs_to(problems::Entity)
                .from(Column::ProblemId)
                .to(problems::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_user(user_id: Uuid) -> Select<Entity> {
        Self::find().filter(Column::UserId.eq(user_id))
    }

    #[inline]
    pub fn find_by_user_and_problem(user_id: Uuid, problem_id: Uuid) -> Select<Entity> {
        Self::find_by_user(user_id).filter(Column::ProblemId.eq(problem_id))
    }
}
