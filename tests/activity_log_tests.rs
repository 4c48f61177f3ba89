use actix_web::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::{json, Value};

mod common;
use common::TestApp;

fn action(entry: &Value) -> Value {
    serde_json::from_str(entry["action_json"].as_str().unwrap()).unwrap()
}

#[actix_web::test]
async fn test_every_mutation_is_logged() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;

    let (_, created) = test_app
        .post(&token, "/api/planes", json!({ "model": "ATR 72", "capacity": 70 }))
        .await;
    let id = created["data"]["id"].as_i64().unwrap();
    test_app
        .put(&token, &format!("/api/planes/{}", id), json!({ "capacity": 72 }))
        .await;
    test_app.delete(&token, &format!("/api/planes/{}", id)).await;

    assert_eq!(test_app.log_count("planes").await, 3);

    let (status, body) = test_app.get(&token, "/api/logs?table=planes").await;
    assert_eq!(status, StatusCode::OK);
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 3);

    // Newest first
    let actions: Vec<Value> = entries.iter().map(action).collect();
    assert_eq!(actions[0]["action"], "DELETE");
    assert_eq!(actions[0]["data"], json!({ "id": id }));
    assert_eq!(actions[1]["action"], "UPDATE");
    assert_eq!(actions[1]["data"], json!({ "id": id, "capacity": 72 }));
    assert_eq!(actions[2]["action"], "INSERT");
    assert_eq!(actions[2]["data"]["model"], "ATR 72");
    assert!(actions[2]["timestamp"].is_string());

    assert_eq!(entries[0]["username"], "admin");
    assert_eq!(entries[0]["user_id"], 1);
}

#[actix_web::test]
async fn test_failed_mutation_is_not_logged() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;

    let (status, _) = test_app
        .post(&token, "/api/planes", json!({ "model": "ATR 72", "capacity": -1 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(test_app.log_count("planes").await, 0);
}

#[actix_web::test]
async fn test_log_filters() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;

    test_app
        .post(&token, "/api/roles", json!({ "name": "Agent" }))
        .await;
    test_app.add_client(&token, "ana@example.com", None).await;

    let (_, body) = test_app.get(&token, "/api/logs").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (_, body) = test_app.get(&token, "/api/logs?table=roles").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (_, body) = test_app.get(&token, "/api/logs?user_id=999").await;
    assert!(body["data"].as_array().unwrap().is_empty());

    // Date bounds cover whole days
    let today = Utc::now().date_naive();
    let (_, body) = test_app
        .get(&token, &format!("/api/logs?from={}&to={}", today, today))
        .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let tomorrow = today + Duration::days(1);
    let (_, body) = test_app
        .get(&token, &format!("/api/logs?from={}", tomorrow))
        .await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let yesterday = today - Duration::days(1);
    let (_, body) = test_app
        .get(&token, &format!("/api/logs?to={}", yesterday))
        .await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_log_filter_rejects_malformed_date() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;

    let (status, body) = test_app.get(&token, "/api/logs?from=yesterday").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_log_options() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;

    test_app.add_client(&token, "ana@example.com", None).await;
    test_app
        .post(&token, "/api/roles", json!({ "name": "Agent" }))
        .await;

    let (status, body) = test_app.get(&token, "/api/logs/options").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["tables"], json!(["clients", "roles"]));
    assert_eq!(body["data"]["users"][0]["username"], "admin");
}

#[actix_web::test]
async fn test_deleting_actor_keeps_log_rows() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;

    let (_, other) = test_app
        .post(
            &token,
            "/api/users",
            json!({
                "username": "second",
                "role_id": 1,
                "email": "second@greenairways.com",
                "password": "pw"
            }),
        )
        .await;
    let other_id = other["data"]["id"].as_i64().unwrap();

    let (status, login) = test_app
        .send(actix_web::test::TestRequest::post().uri("/api/login").set_json(json!({
            "email": "second@greenairways.com",
            "password": "pw"
        })))
        .await;
    assert_eq!(status, StatusCode::OK);
    let other_token = login["token"].as_str().unwrap().to_string();

    test_app
        .post(&other_token, "/api/planes", json!({ "model": "ATR 72", "capacity": 70 }))
        .await;
    test_app
        .delete(&token, &format!("/api/users/{}", other_id))
        .await;

    let (_, body) = test_app.get(&token, "/api/logs?table=planes").await;
    let entry = &body["data"][0];
    assert!(entry["user_id"].is_null());
    assert!(entry["username"].is_null());
}

#[actix_web::test]
async fn test_log_filter_ignores_blank_fields() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;

    test_app.add_client(&token, "ana@example.com", None).await;

    let (status, body) = test_app
        .get(&token, "/api/logs?table=&user_id=&from=&to=")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}
