use actix_web::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;

mod common;
use common::TestApp;

#[actix_web::test]
async fn test_dashboard_empty() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;

    let (status, body) = test_app.get(&token, "/api/dashboard").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["stats"]["flights"], 0);
    assert_eq!(body["data"]["stats"]["planes"], 0);
    assert!(body["data"]["upcoming_flights"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_dashboard_counts_and_upcoming_flights() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;

    let tomorrow = (Utc::now().date_naive() + Duration::days(1)).to_string();
    let last_year = (Utc::now().date_naive() - Duration::days(365)).to_string();
    test_app.add_flight(&token, &tomorrow).await;
    test_app.add_flight(&token, &last_year).await;
    test_app.add_client(&token, "ana@example.com", None).await;

    let (status, body) = test_app.get(&token, "/api/dashboard").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["stats"]["flights"], 2);
    assert_eq!(body["data"]["stats"]["planes"], 2);
    assert_eq!(body["data"]["stats"]["clients"], 1);
    assert_eq!(body["data"]["stats"]["reservations"], 0);

    // Past departures are not upcoming
    let upcoming = body["data"]["upcoming_flights"].as_array().unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0]["departure_date"], tomorrow);
    assert_eq!(upcoming[0]["origin"], "Quito");
    assert_eq!(upcoming[0]["plane_model"], "Airbus A320");
}

#[actix_web::test]
async fn test_dashboard_search_matches_origin_or_destination() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;

    let tomorrow = (Utc::now().date_naive() + Duration::days(1)).to_string();
    test_app.add_flight(&token, &tomorrow).await;

    let (_, body) = test_app.get(&token, "/api/dashboard?search=guaya").await;
    assert_eq!(body["data"]["upcoming_flights"].as_array().unwrap().len(), 1);

    let (_, body) = test_app.get(&token, "/api/dashboard?search=Cuenca").await;
    assert!(body["data"]["upcoming_flights"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_dashboard_skips_flights_without_plane() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;

    let tomorrow = (Utc::now().date_naive() + Duration::days(1)).to_string();
    let (route_id, _) = test_app.add_route_and_plane(&token).await;
    sqlx::query(
        "INSERT INTO flights (route_id, plane_id, departure_date, departure_time, arrival_time, price)
         VALUES (?, NULL, ?, '10:00:00', '11:00:00', 99.0)",
    )
    .bind(route_id)
    .bind(&tomorrow)
    .execute(&test_app.pool)
    .await
    .unwrap();

    let (_, body) = test_app.get(&token, "/api/dashboard").await;
    assert_eq!(body["data"]["stats"]["flights"], 1);
    assert!(body["data"]["upcoming_flights"].as_array().unwrap().is_empty());

    // Still listed on the flights page, with no plane details
    let (_, flights) = test_app.get(&token, "/api/flights").await;
    assert_eq!(flights["data"][0]["plane_id"], json!(null));
    assert_eq!(flights["data"][0]["plane_model"], json!(null));
}

#[actix_web::test]
async fn test_dashboard_requires_token() {
    let test_app = TestApp::new().await;

    let (status, _) = test_app.get("bogus", "/api/dashboard").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_dashboard_search_folds_accented_letters() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;

    let (_, route) = test_app
        .post(&token, "/api/routes", json!({ "origin": "Ávila", "destination": "Lima" }))
        .await;
    let (_, plane) = test_app
        .post(&token, "/api/planes", json!({ "model": "ATR 72", "capacity": 70 }))
        .await;
    let (status, _) = test_app
        .post(
            &token,
            "/api/flights",
            json!({
                "route_id": route["data"]["id"],
                "plane_id": plane["data"]["id"],
                "departure_date": "2099-06-01",
                "departure_time": "08:00:00",
                "arrival_time": "09:00:00",
                "price": 80.0
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    for term in ["Ávila", "ávila", "ÁVILA"] {
        let (_, body) = test_app
            .get(&token, &format!("/api/dashboard?search={}", urlencode(term)))
            .await;
        assert_eq!(
            body["data"]["upcoming_flights"].as_array().unwrap().len(),
            1,
            "search {:?}",
            term
        );
    }
}

#[actix_web::test]
async fn test_dashboard_search_treats_wildcards_literally() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;

    let tomorrow = (Utc::now().date_naive() + Duration::days(1)).to_string();
    test_app.add_flight(&token, &tomorrow).await;

    for term in ["%25", "_"] {
        let (_, body) = test_app
            .get(&token, &format!("/api/dashboard?search={}", term))
            .await;
        assert!(body["data"]["upcoming_flights"].as_array().unwrap().is_empty());
    }
}

#[actix_web::test]
async fn test_dashboard_search_applies_before_limit() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;

    let soon = Utc::now().date_naive() + Duration::days(1);
    for _ in 0..10 {
        test_app.add_flight(&token, &soon.to_string()).await;
    }

    let (_, route) = test_app
        .post(&token, "/api/routes", json!({ "origin": "Cuenca", "destination": "Loja" }))
        .await;
    let (_, plane) = test_app
        .post(&token, "/api/planes", json!({ "model": "ATR 72", "capacity": 70 }))
        .await;
    test_app
        .post(
            &token,
            "/api/flights",
            json!({
                "route_id": route["data"]["id"],
                "plane_id": plane["data"]["id"],
                "departure_date": (soon + Duration::days(30)).to_string(),
                "departure_time": "08:00:00",
                "arrival_time": "09:00:00",
                "price": 80.0
            }),
        )
        .await;

    let (_, body) = test_app.get(&token, "/api/dashboard").await;
    assert_eq!(body["data"]["upcoming_flights"].as_array().unwrap().len(), 10);

    let (_, body) = test_app.get(&token, "/api/dashboard?search=loja").await;
    let found = body["data"]["upcoming_flights"].as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["destination"], "Loja");
}

/// Percent-encodes the UTF-8 bytes of `term` for a query string.
fn urlencode(term: &str) -> String {
    term.bytes().map(|b| format!("%{:02X}", b)).collect()
}
