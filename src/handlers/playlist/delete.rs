use super::parse_playlist_id;
use crate::{
    auth::Claims,
    error::{self, Result},
    extractors::Json,
    StateTrait,
};
use axum::extract::{Path, State};
use entity::playlists;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::Serialize;

#[derive(Serialize)]
pub struct Response {
    success: bool,
    message: &'static str,
}

pub async fn delete_playlist<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(playlist_id): Path<String>,
) -> Result<Json<Response>> {
    let playlist_id = parse_playlist_id(&playlist_id)?;

    // Ownership is part of the delete filter, the same as every other
    // playlist operation. Memberships go with the playlist via cascade.
    let result = playlists::Entity::delete_many()
        .filter(playlists::Column::Id.eq(playlist_id))
        .filter(playlists::Column::UserId.eq(claims.sub))
        .exec(state.db())
        .await?;

    if result.rows_affected == 0 {
        return Err(error::PLAYLIST_NOT_FOUND);
    }

    Ok(Json(Response {
        success: true,
        message: "playlist deleted",
    }))
}
