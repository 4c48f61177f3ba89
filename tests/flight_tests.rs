use actix_web::http::StatusCode;
use serde_json::json;

mod common;
use common::TestApp;

fn flight_body(route_id: i64, plane_id: i64, departure: &str, arrival: &str, price: f64) -> serde_json::Value {
    json!({
        "route_id": route_id,
        "plane_id": plane_id,
        "departure_date": "2030-03-10",
        "departure_time": departure,
        "arrival_time": arrival,
        "price": price
    })
}

#[actix_web::test]
async fn test_create_flight_lists_route_and_plane() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;
    let (route_id, plane_id) = test_app.add_route_and_plane(&token).await;

    let (status, created) = test_app
        .post(&token, "/api/flights", flight_body(route_id, plane_id, "07:30:00", "08:15:00", 89.99))
        .await;
    assert_eq!(status, StatusCode::OK, "{}", created);
    assert_eq!(created["data"]["departure_time"], "07:30:00");

    let (_, list) = test_app.get(&token, "/api/flights").await;
    let flight = &list["data"][0];
    assert_eq!(flight["route_origin"], "Quito");
    assert_eq!(flight["route_destination"], "Guayaquil");
    assert_eq!(flight["plane_model"], "Airbus A320");
    assert_eq!(flight["plane_capacity"], 180);
    assert_eq!(flight["price"], 89.99);
}

#[actix_web::test]
async fn test_arrival_must_follow_departure() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;
    let (route_id, plane_id) = test_app.add_route_and_plane(&token).await;

    for arrival in ["07:30:00", "06:00:00"] {
        let (status, body) = test_app
            .post(&token, "/api/flights", flight_body(route_id, plane_id, "07:30:00", arrival, 50.0))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Arrival time must be later than departure time");
    }
}

#[actix_web::test]
async fn test_price_must_be_positive() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;
    let (route_id, plane_id) = test_app.add_route_and_plane(&token).await;

    let (status, body) = test_app
        .post(&token, "/api/flights", flight_body(route_id, plane_id, "07:30:00", "09:00:00", 0.0))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Price must be greater than 0");
}

#[actix_web::test]
async fn test_flight_with_unknown_plane_rejected() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;
    let (route_id, _) = test_app.add_route_and_plane(&token).await;

    let (status, _) = test_app
        .post(&token, "/api/flights", flight_body(route_id, 999, "07:30:00", "09:00:00", 10.0))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_update_flight_checks_merged_times() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;
    let id = test_app.add_flight(&token, "2030-03-10").await;

    // Departure at 08:00, so arrival 07:00 is invalid even when sent alone
    let (status, body) = test_app
        .put(&token, &format!("/api/flights/{}", id), json!({ "arrival_time": "07:00:00" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Arrival time must be later than departure time");

    let (status, body) = test_app
        .put(&token, &format!("/api/flights/{}", id), json!({ "price": 199.0 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["price"], 199.0);
    assert_eq!(body["data"]["arrival_time"], "09:00:00");
}

#[actix_web::test]
async fn test_flight_options_list_routes_and_planes() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;
    test_app.add_route_and_plane(&token).await;

    let (status, body) = test_app.get(&token, "/api/flights/options").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["routes"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["planes"][0]["model"], "Airbus A320");
}

#[actix_web::test]
async fn test_delete_flight() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;
    let id = test_app.add_flight(&token, "2030-03-10").await;

    let (status, body) = test_app.delete(&token, &format!("/api/flights/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Flight deleted successfully");

    let (status, _) = test_app.delete(&token, &format!("/api/flights/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_flights_listed_by_date_then_time() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;
    let (route_id, plane_id) = test_app.add_route_and_plane(&token).await;

    for (date, departure, arrival) in [
        ("2030-03-11", "06:00:00", "07:00:00"),
        ("2030-03-10", "18:00:00", "19:00:00"),
        ("2030-03-10", "07:00:00", "08:00:00"),
    ] {
        let (status, _) = test_app
            .post(
                &token,
                "/api/flights",
                json!({
                    "route_id": route_id,
                    "plane_id": plane_id,
                    "departure_date": date,
                    "departure_time": departure,
                    "arrival_time": arrival,
                    "price": 100.0
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, list) = test_app.get(&token, "/api/flights").await;
    let order: Vec<(String, String)> = list["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| {
            (
                f["departure_date"].as_str().unwrap().to_string(),
                f["departure_time"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        order,
        vec![
            ("2030-03-10".to_string(), "07:00:00".to_string()),
            ("2030-03-10".to_string(), "18:00:00".to_string()),
            ("2030-03-11".to_string(), "06:00:00".to_string()),
        ]
    );
}
