use super::require_admin;
use crate::{
    auth::Claims,
    error::{self, Result},
    extractors::Json,
    StateTrait,
};
use axum::extract::{Path, State};
use entity::problems;
use sea_orm::EntityTrait;
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
pub struct Response {
    success: bool,
    message: &'static str,
}

pub async fn delete_problem<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(id): Path<String>,
) -> Result<Json<Response>> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::PROBLEM_NOT_FOUND);
    };

    require_admin(state.db(), claims.sub).await?;

    let result = problems::Entity::delete_by_id(id).exec(state.db()).await?;

    if result.rows_affected == 0 {
        return Err(error::PROBLEM_NOT_FOUND);
    }

    Ok(Json(Response {
        success: true,
        message: "problem deleted",
    }))
}
