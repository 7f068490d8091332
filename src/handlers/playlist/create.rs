use crate::{
    auth::Claims,
    error::{self, DatabaseError, Result},
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use entity::playlists::{self, constraints};
use sea_orm::{EntityTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(max = 64))]
    name: String,
    description: Option<String>,
}

#[derive(Serialize)]
pub struct Playlist {
    id: Uuid,
    name: String,
    description: Option<String>,
    user_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<playlists::Model> for Playlist {
    fn from(model: playlists::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            user_id: model.user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct Response {
    success: bool,
    message: &'static str,
    playlist: Playlist,
}

pub async fn create_playlist<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let name = request.name.trim();

    if name.is_empty() {
        return Err(error::PLAYLIST_NAME_EMPTY);
    }

    let now = Utc::now();

    let playlist = playlists::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_owned()),
        description: Set(request.description),
        user_id: Set(claims.sub),
        created_at: Set(now),
        updated_at: Set(now),
    };

    // The composite unique constraint makes the duplicate check atomic even
    // when two requests race on the same name.
    let result = playlists::Entity::insert(playlist)
        .exec_with_returning(state.db())
        .await;

    let model = match result {
        Err(err) if err.unique_violation(constraints::UC_PLAYLISTS_USER_ID_NAME) => {
            return Err(error::DUPLICATE_PLAYLIST_NAME)
        }
        Err(err) if err.foreign_key_violation(constraints::FK_PLAYLISTS_USER_ID) => {
            warn!("tried to create playlist without registration");
            return Err(error::USER_NOT_REGISTERED);
        }
        r => r?,
    };

    Ok((
        StatusCode::CREATED,
        Json(Response {
            success: true,
            message: "playlist created",
            playlist: model.into(),
        }),
    ))
}
