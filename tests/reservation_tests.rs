use actix_web::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;

mod common;
use common::TestApp;

async fn reservation_fixture(test_app: &TestApp, token: &str) -> (i64, i64) {
    let departure = (Utc::now().date_naive() + Duration::days(30)).to_string();
    let flight_id = test_app.add_flight(token, &departure).await;
    let client_id = test_app.add_client(token, "ana@example.com", None).await;
    (client_id, flight_id)
}

#[actix_web::test]
async fn test_create_reservation_generates_code() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;
    let (client_id, flight_id) = reservation_fixture(&test_app, &token).await;

    let (status, body) = test_app
        .post(
            &token,
            "/api/reservations",
            json!({
                "client_id": client_id,
                "flight_id": flight_id,
                "reservation_date": "2030-01-02",
                "reservation_code": "   "
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);

    let code = body["data"]["reservation_code"].as_str().unwrap();
    assert!(code.starts_with("GRN-"));
    assert_eq!(code.len(), 10);
    assert!(code[4..].chars().all(|c| c.is_ascii_digit()));
    assert!(body["data"]["notes"].is_null());
}

#[actix_web::test]
async fn test_create_reservation_keeps_given_code() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;
    let (client_id, flight_id) = reservation_fixture(&test_app, &token).await;

    let (status, body) = test_app
        .post(
            &token,
            "/api/reservations",
            json!({
                "client_id": client_id,
                "flight_id": flight_id,
                "reservation_date": "2030-01-02",
                "reservation_code": "VIP-001",
                "notes": "Window seat"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["reservation_code"], "VIP-001");
    assert_eq!(body["data"]["notes"], "Window seat");

    let (_, list) = test_app.get(&token, "/api/reservations").await;
    let reservation = &list["data"][0];
    assert_eq!(reservation["client_name"], "Ana Torres");
    assert_eq!(reservation["route_origin"], "Quito");
}

#[actix_web::test]
async fn test_reservation_requires_client_flight_and_date() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;
    let (client_id, _) = reservation_fixture(&test_app, &token).await;

    let (status, body) = test_app
        .post(
            &token,
            "/api/reservations",
            json!({ "client_id": client_id, "reservation_date": "2030-01-02" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Client, flight and reservation date are required");
}

#[actix_web::test]
async fn test_update_reservation_blank_code_regenerates() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;
    let (client_id, flight_id) = reservation_fixture(&test_app, &token).await;

    let (_, created) = test_app
        .post(
            &token,
            "/api/reservations",
            json!({
                "client_id": client_id,
                "flight_id": flight_id,
                "reservation_date": "2030-01-02",
                "reservation_code": "KEEP-ME"
            }),
        )
        .await;
    let id = created["data"]["id"].as_i64().unwrap();

    // Omitted code is left alone
    let (status, body) = test_app
        .put(&token, &format!("/api/reservations/{}", id), json!({ "notes": "Aisle" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["reservation_code"], "KEEP-ME");
    assert_eq!(body["data"]["notes"], "Aisle");

    let (status, body) = test_app
        .put(
            &token,
            &format!("/api/reservations/{}", id),
            json!({ "reservation_code": "" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["reservation_code"].as_str().unwrap().starts_with("GRN-"));
}

#[actix_web::test]
async fn test_reservation_options_only_upcoming_flights() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;
    reservation_fixture(&test_app, &token).await;
    test_app.add_flight(&token, "2001-01-01").await;

    let (status, body) = test_app.get(&token, "/api/reservations/options").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["clients"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["flights"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_reservations_listed_newest_first() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;
    let (client_id, flight_id) = reservation_fixture(&test_app, &token).await;

    for (date, code) in [
        ("2030-01-05", "GRN-000005"),
        ("2030-02-01", "GRN-000201"),
        ("2029-12-31", "GRN-001231"),
    ] {
        let (status, _) = test_app
            .post(
                &token,
                "/api/reservations",
                json!({
                    "client_id": client_id,
                    "flight_id": flight_id,
                    "reservation_date": date,
                    "reservation_code": code
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, list) = test_app.get(&token, "/api/reservations").await;
    let codes: Vec<&str> = list["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["reservation_code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["GRN-000201", "GRN-000005", "GRN-001231"]);
}

#[actix_web::test]
async fn test_passengers_listed_by_name() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;
    let (client_id, flight_id) = reservation_fixture(&test_app, &token).await;

    let (_, reservation) = test_app
        .post(
            &token,
            "/api/reservations",
            json!({
                "client_id": client_id,
                "flight_id": flight_id,
                "reservation_date": "2030-01-02"
            }),
        )
        .await;
    let reservation_id = reservation["data"]["id"].as_i64().unwrap();

    for (name, identification) in [("Marta Vega", "0922222222"), ("Bruno Paz", "0933333333")] {
        let (status, _) = test_app
            .post(
                &token,
                "/api/passengers",
                json!({
                    "reservation_id": reservation_id,
                    "name": name,
                    "identification": identification
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, list) = test_app.get(&token, "/api/passengers").await;
    assert_eq!(list["data"][0]["name"], "Bruno Paz");
    assert_eq!(list["data"][1]["name"], "Marta Vega");
}

#[actix_web::test]
async fn test_passenger_lifecycle() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;
    let (client_id, flight_id) = reservation_fixture(&test_app, &token).await;

    let (_, reservation) = test_app
        .post(
            &token,
            "/api/reservations",
            json!({
                "client_id": client_id,
                "flight_id": flight_id,
                "reservation_date": "2030-01-02",
                "reservation_code": "GRN-000001"
            }),
        )
        .await;
    let reservation_id = reservation["data"]["id"].as_i64().unwrap();

    let (_, options) = test_app.get(&token, "/api/passengers/options").await;
    assert_eq!(options["data"]["reservations"][0]["reservation_code"], "GRN-000001");

    let (status, created) = test_app
        .post(
            &token,
            "/api/passengers",
            json!({
                "reservation_id": reservation_id,
                "name": "Luis Torres",
                "identification": "0911111111"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{}", created);
    let passenger_id = created["data"]["id"].as_i64().unwrap();

    let (_, list) = test_app.get(&token, "/api/passengers").await;
    let passenger = &list["data"][0];
    assert_eq!(passenger["reservation_code"], "GRN-000001");
    assert_eq!(passenger["client_name"], "Ana Torres");
    assert_eq!(passenger["route_destination"], "Guayaquil");

    // A reservation with passengers cannot be removed
    let (status, _) = test_app
        .delete(&token, &format!("/api/reservations/{}", reservation_id))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, updated) = test_app
        .put(
            &token,
            &format!("/api/passengers/{}", passenger_id),
            json!({ "name": "Luis A. Torres" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["name"], "Luis A. Torres");
    assert_eq!(updated["data"]["identification"], "0911111111");

    let (status, body) = test_app
        .delete(&token, &format!("/api/passengers/{}", passenger_id))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Passenger deleted successfully");

    let (status, _) = test_app
        .delete(&token, &format!("/api/reservations/{}", reservation_id))
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_passenger_requires_all_fields() {
    let test_app = TestApp::new().await;
    let token = test_app.login_and_get_token().await;

    let (status, body) = test_app
        .post(
            &token,
            "/api/passengers",
            json!({ "name": "Luis", "identification": "0911111111" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "All fields are required");
}
