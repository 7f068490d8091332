mod utils;

use utils::prelude::*;

#[tokio::test]
#[serial]
async fn create_requires_registration() {
    let app = App::new().await;
    let user = User::new(JWT_SECRET);

    let res = app
        .post("/problem")
        .user(&user)
        .json(&json!({
            "title": "Sum",
            "description": "Add two numbers.",
            "difficulty": "EASY",
            "test_cases": [{ "input": "2 7", "output": "9" }],
        }))
        .send()
        .await;

    assert_error!(res, error::USER_NOT_REGISTERED);
}

#[tokio::test]
#[serial]
async fn create_requires_admin() {
    let app = App::new().await;
    let user = app.register_user().await;

    let res = app
        .post("/problem")
        .user(&user)
        .json(&json!({
            "title": "Sum",
            "description": "Add two numbers.",
            "difficulty": "EASY",
            "test_cases": [{ "input": "2 7", "output": "9" }],
        }))
        .send()
        .await;

    assert_error!(res, error::NOT_ADMIN);
}

#[tokio::test]
#[serial]
async fn create_rejects_empty_test_cases() {
    let app = App::new().await;
    let admin = app.register_admin().await;

    let res = app
        .post("/problem")
        .user(&admin)
        .json(&json!({
            "title": "Sum",
            "description": "Add two numbers.",
            "difficulty": "EASY",
            "test_cases": [],
        }))
        .send()
        .await;

    assert_error!(res, error::JSON_VALIDATE_INVALID);
}

#[tokio::test]
#[serial]
async fn create_and_get() {
    let app = App::new().await;
    let admin = app.register_admin().await;
    let user = app.register_user().await;

    let problem_id = app.create_problem(&admin).await;

    let res = app
        .get(&format!("/problem/{problem_id}"))
        .user(&user)
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;
    assert_eq!(body["success"], true);
    assert_eq!(body["problem"]["id"], problem_id.to_string());
    assert_eq!(body["problem"]["difficulty"], "EASY");
    assert_eq!(body["problem"]["test_cases"][0]["input"], "2 7");
}

#[tokio::test]
#[serial]
async fn list_contains_created_problems() {
    let app = App::new().await;
    let admin = app.register_admin().await;
    let user = app.register_user().await;

    let first = app.create_problem(&admin).await;
    let second = app.create_problem(&admin).await;

    let res = app.get("/problem").user(&user).send().await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;
    let ids: Vec<&str> = body["problems"]
        .as_array()
        .unwrap()
        .iter()
        .map(|problem| problem["id"].as_str().unwrap())
        .collect();

    assert!(ids.contains(&first.to_string().as_str()));
    assert!(ids.contains(&second.to_string().as_str()));
}

#[tokio::test]
#[serial]
async fn get_unknown_problem() {
    let app = App::new().await;
    let user = app.register_user().await;

    let res = app
        .get(&format!("/problem/{}", uuid::Uuid::new_v4()))
        .user(&user)
        .send()
        .await;

    assert_error!(res, error::PROBLEM_NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn get_malformed_problem_id() {
    let app = App::new().await;
    let user = app.register_user().await;

    let res = app.get("/problem/not-a-uuid").user(&user).send().await;

    assert_error!(res, error::PROBLEM_NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn delete_requires_admin() {
    let app = App::new().await;
    let admin = app.register_admin().await;
    let user = app.register_user().await;

    let problem_id = app.create_problem(&admin).await;

    let res = app
        .delete(&format!("/problem/{problem_id}"))
        .user(&user)
        .send()
        .await;

    assert_error!(res, error::NOT_ADMIN);
}

#[tokio::test]
#[serial]
async fn delete_problem() {
    let app = App::new().await;
    let admin = app.register_admin().await;

    let problem_id = app.create_problem(&admin).await;

    let res = app
        .delete(&format!("/problem/{problem_id}"))
        .user(&admin)
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let res = app
        .get(&format!("/problem/{problem_id}"))
        .user(&admin)
        .send()
        .await;

    assert_error!(res, error::PROBLEM_NOT_FOUND);
}
