use crate::{
    auth::Claims,
    clients::AiTrait,
    error::{self, Result},
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::extract::State;
use entity::problems;
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    problem_id: Uuid,
    #[validate(length(min = 1, max = 4096))]
    message: String,
}

#[derive(Serialize)]
pub struct Response {
    success: bool,
    message: &'static str,
    response: String,
}

/// Stateless per call: the tutoring context is rebuilt from the problem row
/// every time, nothing client-supplied reaches the model besides the message.
pub async fn chat<S: StateTrait>(
    State(state): State<S>,
    _claims: Claims,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Response>> {
    let problem = problems::Entity::find_by_id(request.problem_id)
        .one(state.db())
        .await?
        .ok_or(error::PROBLEM_NOT_FOUND)?;

    let instruction = system_instruction(&problem);
    let response = state.ai().generate(&instruction, &request.message).await?;

    Ok(Json(Response {
        success: true,
        message: "response generated",
        response,
    }))
}

fn system_instruction(problem: &problems::Model) -> String {
    format!(
        "You are an expert coding tutor helping a student with the following \
         algorithm problem.\n\n\
         Title: {}\n\
         Difficulty: {:?}\n\n\
         Description:\n{}\n\n\
         Examples:\n{}\n\n\
         Test cases:\n{}\n\n\
         Starter code:\n{}\n\n\
         Give hints and explanations step by step instead of pasting a full \
         solution unless the student explicitly asks for one. Only answer \
         questions related to this problem.",
        problem.title,
        problem.difficulty,
        problem.description,
        problem.examples,
        problem.test_cases,
        problem.start_code,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn instruction_embeds_problem_fields() {
        let problem = problems::Model {
            id: Uuid::new_v4(),
            title: "Two Sum".to_owned(),
            description: "Find two numbers adding up to the target.".to_owned(),
            difficulty: problems::Difficulty::Easy,
            tags: json!(["array"]),
            examples: json!([{"input": "[2,7], 9", "output": "[0,1]"}]),
            test_cases: json!([{"input": "2 7 9", "output": "0 1"}]),
            start_code: json!({"Python": "def two_sum():\n    pass"}),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let instruction = system_instruction(&problem);

        assert!(instruction.contains("Two Sum"));
        assert!(instruction.contains("adding up to the target"));
        assert!(instruction.contains("def two_sum"));
        assert!(instruction.contains("Only answer questions related to this problem."));
    }
}
