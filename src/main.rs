use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use tracing_subscriber::EnvFilter;

use greenairways_admin::app::AppServices;
use greenairways_admin::auth::JwtManager;
use greenairways_admin::config::AppConfig;
use greenairways_admin::database::initialize_database;
use greenairways_admin::openapi_config::api_doc;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let pool = initialize_database(&config.database_url).await?;

    let services = AppServices::new(pool, JwtManager::new(&config.jwt_secret));

    // First run: seed an administrator so someone can sign in.
    let created = services
        .system_users
        .bootstrap_admin(&config.admin_username, &config.admin_email, &config.admin_password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create initial administrator: {}", e))?;
    if created {
        tracing::warn!(
            email = %config.admin_email,
            "Created initial administrator; change its password"
        );
    }

    tracing::info!("GreenAirways admin server listening on http://{}", config.bind_address);
    tracing::info!("API documentation: http://{}/swagger-ui/", config.bind_address);

    // Build the OpenAPI document once, outside the worker factory
    let openapi_spec = api_doc();

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .supports_credentials(),
            )
            .wrap(Logger::default())
            .service(
                utoipa_swagger_ui::SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi_spec.clone()),
            )
            .configure(|cfg| services.configure(cfg))
    })
    .bind(config.bind_address)?
    .run()
    .await?;

    Ok(())
}
