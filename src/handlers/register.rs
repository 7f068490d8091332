use crate::{
    auth::Claims,
    error::{self, DatabaseError, Result},
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use entity::users::{self, constraints};
use sea_orm::{EntityTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 64))]
    name: String,
    #[validate(email)]
    email: String,
}

#[derive(Serialize)]
pub struct Response {
    success: bool,
    message: &'static str,
    user_id: Uuid,
}

pub async fn register<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let user = users::ActiveModel {
        id: Set(claims.sub),
        name: Set(request.name),
        email: Set(request.email),
        role: Set(users::Role::User),
        created_at: Set(Utc::now()),
    };

    let result = users::Entity::insert(user)
        .exec_without_returning(state.db())
        .await;

    match result {
        Err(err) if err.unique_violation(constraints::PK_USERS) => {
            return Err(error::USER_ALREADY_EXISTS)
        }
        Err(err) if err.unique_violation(constraints::UC_USERS_EMAIL) => {
            return Err(error::EMAIL_TAKEN)
        }
        r => r?,
    };

    Ok((
        StatusCode::CREATED,
        Json(Response {
            success: true,
            message: "user registered",
            user_id: claims.sub,
        }),
    ))
}
