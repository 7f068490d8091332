use super::{find_owned, parse_playlist_id};
use crate::{auth::Claims, error::Result, extractors::Json, StateTrait};
use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use entity::problems;
use sea_orm::{FromQueryResult, ModelTrait, QuerySelect};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// Member problems are projected, the full statement and starter code are
/// only served by the problem endpoints.
#[derive(Serialize, FromQueryResult)]
pub struct ProblemSummary {
    id: Uuid,
    title: String,
    description: String,
    difficulty: problems::Difficulty,
    tags: Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct Playlist {
    id: Uuid,
    name: String,
    description: Option<String>,
    user_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    problems: Vec<ProblemSummary>,
}

#[derive(Serialize)]
pub struct Response {
    success: bool,
    message: &'static str,
    playlist: Playlist,
}

pub async fn get_playlist<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(playlist_id): Path<String>,
) -> Result<Json<Response>> {
    let playlist_id = parse_playlist_id(&playlist_id)?;
    let playlist = find_owned(state.db(), playlist_id, claims.sub).await?;

    let problems = playlist
        .find_related(problems::Entity)
        .select_only()
        .columns([
            problems::Column::Id,
            problems::Column::Title,
            problems::Column::Description,
            problems::Column::Difficulty,
            problems::Column::Tags,
            problems::Column::CreatedAt,
            problems::Column::UpdatedAt,
        ])
        .into_model::<ProblemSummary>()
        .all(state.db())
        .await?;

    Ok(Json(Response {
        success: true,
        message: "playlist fetched",
        playlist: Playlist {
            id: playlist.id,
            name: playlist.name,
            description: playlist.description,
            user_id: playlist.user_id,
            created_at: playlist.created_at,
            updated_at: playlist.updated_at,
            problems,
        },
    }))
}
