mod chat;
mod history;
mod save;

use crate::StateTrait;
use axum::{
    routing::{get, post},
    Router,
};

/// Routes for the AI tutor
///
/// POST /chatbot/chat
/// POST /chatbot/save
/// GET  /chatbot/history/:problem_id
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/chat", post(chat::chat::<S>))
        .route("/save", post(save::save_message::<S>))
        .route("/history/:problem_id", get(history::get_history::<S>))
}
