use actix_web::{http::StatusCode, test, App};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tempfile::TempDir;
use greenairways_admin::{
    app::AppServices,
    auth::JwtManager,
    database::initialize_database,
};

pub const ADMIN_EMAIL: &str = "admin@greenairways.com";
pub const ADMIN_PASSWORD: &str = "admin";

pub struct TestApp {
    pub pool: SqlitePool,
    pub services: AppServices,
    #[allow(dead_code)]
    pub temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        // Create temporary database
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let database_url = format!("sqlite://{}", db_path.display());

        // Opens the file and runs migrations
        let pool = initialize_database(&database_url)
            .await
            .expect("Failed to initialize database");

        let services = AppServices::new(pool.clone(), JwtManager::new("test_secret_key"));

        // Administrator for admin/admin logins
        services
            .system_users
            .bootstrap_admin("admin", ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .expect("Failed to bootstrap administrator");

        Self {
            pool,
            services,
            temp_dir,
        }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().configure(|cfg| self.services.configure(cfg))
    }

    pub async fn login_and_get_token(&self) -> String {
        let (status, body) = self
            .send(
                test::TestRequest::post()
                    .uri("/api/login")
                    .set_json(json!({
                        "email": ADMIN_EMAIL,
                        "password": ADMIN_PASSWORD
                    })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", body);

        body["token"].as_str().unwrap().to_string()
    }

    /// Runs one request against a fresh service and decodes the JSON body
    /// (`Value::Null` when the body is empty).
    pub async fn send(&self, req: test::TestRequest) -> (StatusCode, Value) {
        let app = test::init_service(self.create_app()).await;
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        let bytes = test::read_body(resp).await;
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    pub async fn get(&self, token: &str, uri: &str) -> (StatusCode, Value) {
        self.send(
            test::TestRequest::get()
                .uri(uri)
                .insert_header(("Authorization", format!("Bearer {}", token))),
        )
        .await
    }

    pub async fn post(&self, token: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(
            test::TestRequest::post()
                .uri(uri)
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .set_json(body),
        )
        .await
    }

    pub async fn put(&self, token: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(
            test::TestRequest::put()
                .uri(uri)
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .set_json(body),
        )
        .await
    }

    pub async fn delete(&self, token: &str, uri: &str) -> (StatusCode, Value) {
        self.send(
            test::TestRequest::delete()
                .uri(uri)
                .insert_header(("Authorization", format!("Bearer {}", token))),
        )
        .await
    }

    /// Creates a route and a plane and returns their ids.
    pub async fn add_route_and_plane(&self, token: &str) -> (i64, i64) {
        let (_, route) = self
            .post(
                token,
                "/api/routes",
                json!({ "origin": "Quito", "destination": "Guayaquil" }),
            )
            .await;
        let (_, plane) = self
            .post(
                token,
                "/api/planes",
                json!({ "model": "Airbus A320", "capacity": 180 }),
            )
            .await;
        (
            route["data"]["id"].as_i64().unwrap(),
            plane["data"]["id"].as_i64().unwrap(),
        )
    }

    /// Creates a flight departing on `date` and returns its id.
    pub async fn add_flight(&self, token: &str, date: &str) -> i64 {
        let (route_id, plane_id) = self.add_route_and_plane(token).await;
        let (status, flight) = self
            .post(
                token,
                "/api/flights",
                json!({
                    "route_id": route_id,
                    "plane_id": plane_id,
                    "departure_date": date,
                    "departure_time": "08:00:00",
                    "arrival_time": "09:00:00",
                    "price": 120.5
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "flight creation failed: {}", flight);
        flight["data"]["id"].as_i64().unwrap()
    }

    pub async fn add_client(&self, token: &str, email: &str, phone: Option<&str>) -> i64 {
        let (status, client) = self
            .post(
                token,
                "/api/clients",
                json!({
                    "name": "Ana Torres",
                    "identification": "0102030405",
                    "phone": phone,
                    "email": email
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "client creation failed: {}", client);
        client["data"]["id"].as_i64().unwrap()
    }

    /// Number of activity log rows for `table`.
    pub async fn log_count(&self, table: &str) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM activity_log WHERE affected_table = ?")
            .bind(table)
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count activity log rows")
    }
}
