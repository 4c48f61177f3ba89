use anyhow::Context;
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub jwt_secret: String,
    pub admin_username: String,
    pub admin_email: String,
    pub admin_password: String,
}

impl AppConfig {
    /// Reads settings from the environment, after loading `.env` if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .unwrap_or(5000);

        let bind_address = format!("{}:{}", host, port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", host, port))?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:greenairways.db".to_string());

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; generated a random secret, tokens will not survive a restart");
            random_secret()
        });

        let admin_username =
            std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let admin_email =
            std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@greenairways.com".to_string());
        let admin_password =
            std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string());

        Ok(Self {
            database_url,
            bind_address,
            jwt_secret,
            admin_username,
            admin_email,
            admin_password,
        })
    }
}

fn random_secret() -> String {
    use base64::Engine;
    use rand::Rng;

    let bytes: [u8; 32] = rand::thread_rng().gen();
    base64::engine::general_purpose::STANDARD.encode(bytes)
}
