mod list;

use crate::StateTrait;
use axum::{routing::get, Router};

/// Routes for submission history
///
/// GET /submission
/// GET /submission/problem/:problem_id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list::list_submissions::<S>))
        .route(
            "/problem/:problem_id",
            get(list::list_submissions_for_problem::<S>),
        )
}
