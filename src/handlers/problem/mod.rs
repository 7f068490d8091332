mod create;
mod delete;
mod list;

use crate::{
    error::{self, Result},
    StateTrait,
};
use axum::{
    routing::{get, post},
    Router,
};
use entity::users;
use sea_orm::{ConnectionTrait, EntityTrait};
use uuid::Uuid;

/// Routes for problem management
///
/// GET    /problem
/// GET    /problem/:id
/// POST   /problem      (admin)
/// DELETE /problem/:id  (admin)
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list::list_problems::<S>).post(create::create_problem::<S>))
        .route(
            "/:id",
            get(list::get_problem::<S>).delete(delete::delete_problem::<S>),
        )
}

async fn require_admin<C: ConnectionTrait>(db: &C, user_id: Uuid) -> Result<()> {
    let user = users::Entity::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or(error::USER_NOT_REGISTERED)?;

    if user.role != users::Role::Admin {
        // this is suspicious so log it
        warn!("non-admin tried to modify problems");
        return Err(error::NOT_ADMIN);
    }

    Ok(())
}
