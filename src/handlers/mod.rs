mod chatbot;
mod execution;
mod playlist;
mod problem;
mod register;
mod submission;

use crate::state::StateTrait;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use sea_orm::ConnectionTrait;

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/user/register", post(register::register::<S>))
        .nest("/problem", problem::routes::<S>())
        .nest("/playlist", playlist::routes::<S>())
        .nest("/execute-code", execution::routes::<S>())
        .nest("/submission", submission::routes::<S>())
        .nest("/chatbot", chatbot::routes::<S>())
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
}

async fn liveness<S: StateTrait>(State(state): State<S>) -> StatusCode {
    if state.db().execute_unprepared("select 1").await.is_err() {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}
