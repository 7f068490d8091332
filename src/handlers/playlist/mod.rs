mod add_problems;
mod create;
mod delete;
mod get;
mod list;
mod remove_problems;

use crate::{
    error::{self, Result},
    StateTrait,
};
use axum::{
    routing::{get as http_get, post},
    Router,
};
use entity::playlists;
use sea_orm::ConnectionTrait;
use uuid::Uuid;

/// Routes for playlist management
///
/// POST   /playlist/create-playlist
/// GET    /playlist
/// GET    /playlist/:playlist_id
/// DELETE /playlist/:playlist_id
/// POST   /playlist/:playlist_id/add-problem
/// DELETE /playlist/:playlist_id/remove-problem
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", http_get(list::list_playlists::<S>))
        .route("/create-playlist", post(create::create_playlist::<S>))
        .route(
            "/:playlist_id",
            http_get(get::get_playlist::<S>).delete(delete::delete_playlist::<S>),
        )
        .route(
            "/:playlist_id/add-problem",
            post(add_problems::add_problems::<S>),
        )
        .route(
            "/:playlist_id/remove-problem",
            axum::routing::delete(remove_problems::remove_problems::<S>),
        )
}

fn parse_playlist_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| error::PLAYLIST_NOT_FOUND)
}

/// Loads a playlist only if the caller owns it. A missing playlist and an
/// ownership mismatch are indistinguishable to the caller.
async fn find_owned<C: ConnectionTrait>(
    db: &C,
    playlist_id: Uuid,
    user_id: Uuid,
) -> Result<playlists::Model> {
    playlists::Entity::find_by_id_and_owner(playlist_id, user_id)
        .one(db)
        .await?
        .ok_or(error::PLAYLIST_NOT_FOUND)
}
