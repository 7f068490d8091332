use crate::{
    auth::Claims,
    error::{self, Result},
    extractors::Json,
    StateTrait,
};
use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use entity::chat_messages::{self, MessageType};
use sea_orm::FromQueryResult;
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize, FromQueryResult)]
pub struct Entry {
    id: Uuid,
    message: String,
    response: String,
    message_type: MessageType,
    created_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct Response {
    success: bool,
    message: &'static str,
    history: Vec<Entry>,
}

/// Transcript of the caller for one problem, oldest first.
pub async fn get_history<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(problem_id): Path<String>,
) -> Result<Json<Response>> {
    let Ok(problem_id) = Uuid::parse_str(&problem_id) else {
        return Err(error::PROBLEM_NOT_FOUND);
    };

    let history = chat_messages::Entity::find_transcript(claims.sub, problem_id)
        .into_model::<Entry>()
        .all(state.db())
        .await?;

    Ok(Json(Response {
        success: true,
        message: "history fetched",
        history,
    }))
}
