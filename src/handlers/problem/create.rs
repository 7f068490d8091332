use super::require_admin;
use crate::{
    auth::Claims,
    error::{Error, Result},
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use entity::problems::{self, Difficulty, TestCase};
use sea_orm::{EntityTrait, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 128))]
    title: String,
    #[validate(length(min = 1))]
    description: String,
    difficulty: Difficulty,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    examples: Value,
    #[validate(length(min = 1))]
    test_cases: Vec<TestCase>,
    #[serde(default)]
    start_code: Value,
}

#[derive(Serialize)]
pub struct Response {
    success: bool,
    message: &'static str,
    problem_id: Uuid,
}

pub async fn create_problem<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    require_admin(state.db(), claims.sub).await?;

    let now = Utc::now();
    let id = Uuid::new_v4();

    let problem = problems::ActiveModel {
        id: Set(id),
        title: Set(request.title),
        description: Set(request.description),
        difficulty: Set(request.difficulty),
        tags: Set(serde_json::to_value(request.tags).map_err(Error::internal)?),
        examples: Set(request.examples),
        test_cases: Set(serde_json::to_value(request.test_cases).map_err(Error::internal)?),
        start_code: Set(request.start_code),
        created_at: Set(now),
        updated_at: Set(now),
    };

    problems::Entity::insert(problem)
        .exec_without_returning(state.db())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Response {
            success: true,
            message: "problem created",
            problem_id: id,
        }),
    ))
}
