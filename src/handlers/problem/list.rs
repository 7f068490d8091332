use crate::{
    error::{self, Result},
    extractors::Json,
    StateTrait,
};
use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use entity::problems;
use sea_orm::EntityTrait;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

#[derive(Serialize)]
pub struct Problem {
    id: Uuid,
    title: String,
    description: String,
    difficulty: problems::Difficulty,
    tags: Value,
    examples: Value,
    test_cases: Value,
    start_code: Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<problems::Model> for Problem {
    fn from(model: problems::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            difficulty: model.difficulty,
            tags: model.tags,
            examples: model.examples,
            test_cases: model.test_cases,
            start_code: model.start_code,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct GetResponse {
    success: bool,
    message: &'static str,
    problem: Problem,
}

#[derive(Serialize)]
pub struct ListResponse {
    success: bool,
    message: &'static str,
    problems: Vec<Problem>,
}

pub async fn get_problem<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<GetResponse>> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::PROBLEM_NOT_FOUND);
    };

    let problem = problems::Entity::find_by_id(id)
        .one(state.db())
        .await?
        .ok_or(error::PROBLEM_NOT_FOUND)?;

    Ok(Json(GetResponse {
        success: true,
        message: "problem fetched",
        problem: problem.into(),
    }))
}

pub async fn list_problems<S: StateTrait>(State(state): State<S>) -> Result<Json<ListResponse>> {
    let problems = problems::Entity::find().all(state.db()).await?;

    Ok(Json(ListResponse {
        success: true,
        message: "problems fetched",
        problems: problems.into_iter().map(Problem::from).collect(),
    }))
}
