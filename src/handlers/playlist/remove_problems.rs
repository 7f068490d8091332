use super::{find_owned, parse_playlist_id};
use crate::{
    auth::Claims,
    error::Result,
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::extract::{Path, State};
use entity::playlist_problems;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1))]
    problem_ids: Vec<Uuid>,
}

#[derive(Serialize)]
pub struct Response {
    success: bool,
    message: &'static str,
    removed: u64,
}

pub async fn remove_problems<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(playlist_id): Path<String>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Response>> {
    let playlist_id = parse_playlist_id(&playlist_id)?;
    let playlist = find_owned(state.db(), playlist_id, claims.sub).await?;

    // Ids that are not members simply do not match any row.
    let result = playlist_problems::Entity::delete_many()
        .filter(playlist_problems::Column::PlaylistId.eq(playlist.id))
        .filter(playlist_problems::Column::ProblemId.is_in(request.problem_ids))
        .exec(state.db())
        .await?;

    Ok(Json(Response {
        success: true,
        message: "problems removed from playlist",
        removed: result.rows_affected,
    }))
}
