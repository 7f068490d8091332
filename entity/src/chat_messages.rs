use crate::{problems, users};
use sea_orm::{entity::prelude::*, QueryOrder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod constraints {
    pub const PK_CHAT_MESSAGES: &str = "PK_chat_messages";
    pub const FK_CHAT_MESSAGES_USER_ID: &str = "FK_chat_messages_user_id";
    pub const FK_CHAT_MESSAGES_PROBLEM_ID: &str = "FK_chat_messages_problem_id";
}

/// One user/assistant exchange in the tutor transcript. Append-only.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "chat_messages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub problem_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    #[sea_orm(column_type = "Text")]
    pub response: String,
    pub message_type: MessageType,
    pub created_at: DateTimeUtc,
}

#[derive(EnumIter, DeriveActiveEnum, PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[sea_orm(string_value = "user")]
    User,
    #[sea_orm(string_value = "assistant")]
    Assistant,
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
    pub fn find_transcript(user_id: Uuid, problem_id: Uuid) -> Select<Entity> {
        Self::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ProblemId.eq(problem_id))
            .order_by_asc(Column::CreatedAt)
    }
}
