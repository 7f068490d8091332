use crate::{
    auth::Claims,
    error::{self, DatabaseError, Result},
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use entity::chat_messages::{self, constraints, MessageType};
use sea_orm::{EntityTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    problem_id: Uuid,
    #[validate(length(min = 1))]
    message: String,
    response: String,
    message_type: MessageType,
}

#[derive(Serialize)]
pub struct Response {
    success: bool,
    message: &'static str,
    message_id: Uuid,
}

pub async fn save_message<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let id = Uuid::new_v4();

    let message = chat_messages::ActiveModel {
        id: Set(id),
        user_id: Set(claims.sub),
        problem_id: Set(request.problem_id),
        message: Set(request.message),
        response: Set(request.response),
        message_type: Set(request.message_type),
        created_at: Set(Utc::now()),
    };

    let result = chat_messages::Entity::insert(message)
        .exec_without_returning(state.db())
        .await;

    match result {
        Err(err) if err.foreign_key_violation(constraints::FK_CHAT_MESSAGES_PROBLEM_ID) => {
            return Err(error::PROBLEM_NOT_FOUND)
        }
        Err(err) if err.foreign_key_violation(constraints::FK_CHAT_MESSAGES_USER_ID) => {
            warn!("tried to save a chat message without registration");
            return Err(error::USER_NOT_REGISTERED);
        }
        r => {
            r?;
        }
    };

    Ok((
        StatusCode::CREATED,
        Json(Response {
            success: true,
            message: "message saved",
            message_id: id,
        }),
    ))
}
