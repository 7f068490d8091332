use super::CaseResult;
use crate::{
    auth::Claims,
    clients::language_name,
    error::{self, DatabaseError, Error, Result},
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use entity::submissions::{self, constraints, Verdict};
use sea_orm::{EntityTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1))]
    source_code: String,
    language_id: i64,
    stdin: Vec<String>,
    expected_outputs: Vec<String>,
    problem_id: Uuid,
}

#[derive(Serialize)]
pub struct Submission {
    id: Uuid,
    user_id: Uuid,
    problem_id: Uuid,
    language: String,
    source_code: String,
    status: Verdict,
    created_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct Response {
    success: bool,
    message: &'static str,
    submission: Submission,
    results: Vec<CaseResult>,
}

pub async fn submit_code<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let (results, verdict) = super::judge(
        &state,
        &request.source_code,
        request.language_id,
        request.stdin,
        request.expected_outputs,
    )
    .await?;

    // Only reached when the judge answered: a failed judge call leaves no
    // submission row behind.
    let language = language_name(request.language_id)
        .expect("language validated before judging")
        .to_owned();

    let submission = submissions::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(claims.sub),
        problem_id: Set(request.problem_id),
        language: Set(language),
        source_code: Set(request.source_code),
        status: Set(verdict),
        results: Set(serde_json::to_value(&results).map_err(Error::internal)?),
        created_at: Set(Utc::now()),
    };

    let result = submissions::Entity::insert(submission)
        .exec_with_returning(state.db())
        .await;

    let model = match result {
        Err(err) if err.foreign_key_violation(constraints::FK_SUBMISSIONS_PROBLEM_ID) => {
            return Err(error::PROBLEM_NOT_FOUND)
        }
        Err(err) if err.foreign_key_violation(constraints::FK_SUBMISSIONS_USER_ID) => {
            warn!("tried to submit code without registration");
            return Err(error::USER_NOT_REGISTERED);
        }
        r => r?,
    };

    Ok((
        StatusCode::CREATED,
        Json(Response {
            success: true,
            message: "submission recorded",
            submission: Submission {
                id: model.id,
                user_id: model.user_id,
                problem_id: model.problem_id,
                language: model.language,
                source_code: model.source_code,
                status: model.status,
                created_at: model.created_at,
            },
            results,
        }),
    ))
}
