use sea_orm::DatabaseConnection;
use std::env;
use std::sync::Arc;

use crate::services::storage_service::StorageService;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expires_in: i64,
    pub storage_upload_url: String,
    pub storage_api_url: String,
    pub storage_private_key: String,
}

#[derive(Clone, axum::extract::FromRef)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub storage: StorageService,
}

impl Config {
    pub fn init() -> Config {
        let server_host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .expect("PORT must be a number");

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in .env");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set in .env");
        let jwt_expires_in = env::var("JWT_EXPIRATION_MINUTES")
            .unwrap_or_else(|_| "60".to_string())
            .parse::<i64>()
            .expect("JWT_EXPIRATION_MINUTES must be a number");

        let storage_upload_url = env::var("STORAGE_UPLOAD_URL")
            .expect("STORAGE_UPLOAD_URL must be set");
        let storage_api_url = env::var("STORAGE_API_URL").expect("STORAGE_API_URL must be set");
        let storage_private_key =
            env::var("STORAGE_PRIVATE_KEY").expect("STORAGE_PRIVATE_KEY must be set");

        Config {
            server_host,
            server_port,
            database_url,
            jwt_secret,
            jwt_expires_in,
            storage_upload_url,
            storage_api_url,
            storage_private_key,
        }
    }
}
