use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

#[allow(unused)]
pub fn accepted_case(stdout: &str) -> Value {
    json!({
        "stdout": stdout,
        "stderr": null,
        "compile_output": null,
        "status": { "id": 3, "description": "Accepted" },
        "time": "0.002",
        "memory": 1024.0,
    })
}

#[allow(unused)]
pub fn wrong_answer_case(stdout: &str) -> Value {
    json!({
        "stdout": stdout,
        "stderr": null,
        "compile_output": null,
        "status": { "id": 4, "description": "Wrong Answer" },
        "time": "0.002",
        "memory": 1024.0,
    })
}

#[allow(unused)]
pub fn compile_error_case(output: &str) -> Value {
    json!({
        "stdout": null,
        "stderr": null,
        "compile_output": output,
        "status": { "id": 6, "description": "Compilation Error" },
        "time": null,
        "memory": null,
    })
}

/// Judge answers the batch submit with one token per case and every poll
/// with the given finished results.
#[allow(unused)]
pub async fn judge_results(server: &MockServer, results: Vec<Value>) {
    let tokens: Vec<Value> = results
        .iter()
        .map(|_| json!({ "token": super::uuid() }))
        .collect();

    Mock::given(method("POST"))
        .and(path("/submissions/batch"))
        .respond_with(ResponseTemplate::new(201).set_body_json(tokens))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/submissions/batch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "submissions": results })))
        .mount(server)
        .await;
}

#[allow(unused)]
pub async fn judge_unavailable(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/submissions/batch"))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
}

#[allow(unused)]
pub async fn gemini_reply(server: &MockServer, text: &str) {
    Mock::given(method("POST"))
        .and(path(format!(
            "/models/{}:generateContent",
            super::setup::GEMINI_MODEL
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }],
        })))
        .mount(server)
        .await;
}

#[allow(unused)]
pub async fn gemini_unavailable(server: &MockServer) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
}
