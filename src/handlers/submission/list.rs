use crate::{
    auth::Claims,
    error::{self, Result},
    extractors::Json,
    StateTrait,
};
use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use entity::submissions::{self, Verdict};
use sea_orm::QueryOrder;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

#[derive(Serialize)]
pub struct Submission {
    id: Uuid,
    problem_id: Uuid,
    language: String,
    source_code: String,
    status: Verdict,
    results: Value,
    created_at: DateTime<Utc>,
}

impl From<submissions::Model> for Submission {
    fn from(model: submissions::Model) -> Self {
        Self {
            id: model.id,
            problem_id: model.problem_id,
            language: model.language,
            source_code: model.source_code,
            status: model.status,
            results: model.results,
            created_at: model.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct Response {
    success: bool,
    message: &'static str,
    submissions: Vec<Submission>,
}

pub async fn list_submissions<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
) -> Result<Json<Response>> {
    let submissions = submissions::Entity::find_by_user(claims.sub)
        .order_by_desc(submissions::Column::CreatedAt)
        .all(state.db())
        .await?;

    Ok(Json(Response {
        success: true,
        message: "submissions fetched",
        submissions: submissions.into_iter().map(Submission::from).collect(),
    }))
}

pub async fn list_submissions_for_problem<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(problem_id): Path<String>,
) -> Result<Json<Response>> {
    let Ok(problem_id) = Uuid::parse_str(&problem_id) else {
        return Err(error::PROBLEM_NOT_FOUND);
    };

    let submissions = submissions::Entity::find_by_user_and_problem(claims.sub, problem_id)
        .order_by_desc(submissions::Column::CreatedAt)
        .all(state.db())
        .await?;

    Ok(Json(Response {
        success: true,
        message: "submissions fetched",
        submissions: submissions.into_iter().map(Submission::from).collect(),
    }))
}
