use crate::{auth::Claims, error::Result, extractors::Json, StateTrait};
use axum::extract::State;
use chrono::{DateTime, Utc};
use entity::{playlist_problems, playlists, problems};
use sea_orm::LoaderTrait;
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
pub struct Playlist {
    id: Uuid,
    name: String,
    description: Option<String>,
    user_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    problems: Vec<Problem>,
}

#[derive(Serialize)]
pub struct Response {
    success: bool,
    message: &'static str,
    playlists: Vec<Playlist>,
}

pub async fn list_playlists<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
) -> Result<Json<Response>> {
    let playlists = playlists::Entity::find_by_owner(claims.sub)
        .all(state.db())
        .await?;

    let problems = playlists
        .load_many_to_many(problems::Entity, playlist_problems::Entity, state.db())
        .await?;

    let playlists = playlists
        .into_iter()
        .zip(problems)
        .map(|(playlist, problems)| Playlist {
            id: playlist.id,
            name: playlist.name,
            description: playlist.description,
            user_id: playlist.user_id,
            created_at: playlist.created_at,
            updated_at: playlist.updated_at,
            problems: problems.into_iter().map(Problem::from).collect(),
        })
        .collect();

    Ok(Json(Response {
        success: true,
        message: "playlists fetched",
        playlists,
    }))
}
