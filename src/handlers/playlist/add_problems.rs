use super::{find_owned, parse_playlist_id};
use crate::{
    auth::Claims,
    error::{self, DatabaseError, Result},
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::extract::{Path, State};
use entity::playlist_problems::{self, constraints};
use sea_orm::{sea_query::OnConflict, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashSet;
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
    added: usize,
    skipped: usize,
}

pub async fn add_problems<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(playlist_id): Path<String>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Response>> {
    let playlist_id = parse_playlist_id(&playlist_id)?;
    let playlist = find_owned(state.db(), playlist_id, claims.sub).await?;

    let existing: HashSet<Uuid> = playlist_problems::Entity::find_by_playlist(playlist.id)
        .filter(playlist_problems::Column::ProblemId.is_in(request.problem_ids.clone()))
        .all(state.db())
        .await?
        .into_iter()
        .map(|membership| membership.problem_id)
        .collect();

    let mut seen = existing.clone();
    let new_ids: Vec<Uuid> = request
        .problem_ids
        .iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .collect();

    if new_ids.is_empty() {
        let mut present: Vec<Uuid> = existing.into_iter().collect();
        present.sort();

        return Err(error::PROBLEMS_ALREADY_IN_PLAYLIST
            .with_details(json!({ "problem_ids": present })));
    }

    let memberships = new_ids.iter().map(|id| playlist_problems::ActiveModel {
        playlist_id: Set(playlist.id),
        problem_id: Set(*id),
    });

    // Membership is a set: a concurrent request inserting the same row wins
    // the race and this insert silently skips it.
    let result = playlist_problems::Entity::insert_many(memberships)
        .on_conflict(
            OnConflict::columns([
                playlist_problems::Column::PlaylistId,
                playlist_problems::Column::ProblemId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(state.db())
        .await;

    match result {
        Err(err) if err.foreign_key_violation(constraints::FK_PLAYLIST_PROBLEMS_PROBLEM_ID) => {
            return Err(error::PROBLEM_NOT_FOUND)
        }
        r => {
            r?;
        }
    };

    Ok(Json(Response {
        success: true,
        message: "problems added to playlist",
        added: new_ids.len(),
        skipped: existing.len(),
    }))
}
