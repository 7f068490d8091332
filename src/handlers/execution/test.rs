use super::CaseResult;
use crate::{
    auth::Claims,
    error::Result,
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::extract::State;
use entity::submissions::Verdict;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1))]
    source_code: String,
    language_id: i64,
    stdin: Vec<String>,
    expected_outputs: Vec<String>,
}

#[derive(Serialize)]
pub struct Response {
    success: bool,
    message: &'static str,
    status: Verdict,
    all_passed: bool,
    results: Vec<CaseResult>,
}

/// Ad-hoc run: the verdict is returned but nothing is persisted.
pub async fn test_code<S: StateTrait>(
    State(state): State<S>,
    _claims: Claims,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Response>> {
    let (results, verdict) = super::judge(
        &state,
        &request.source_code,
        request.language_id,
        request.stdin,
        request.expected_outputs,
    )
    .await?;

    Ok(Json(Response {
        success: true,
        message: "code executed",
        status: verdict,
        all_passed: verdict == Verdict::Accepted,
        results,
    }))
}
