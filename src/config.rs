use std::env;
use std::time::Duration;

use crate::services::registration_manager::DEFAULT_REFRESH_DELAY;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub remote_api_url: String,
    pub registration_refresh_delay: Duration,
}

impl AppConfig {
    /// Reads the process environment; call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| "sqlite://club_admin.db?mode=rwc".to_string());
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port: u16 = lookup("PORT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);
        let remote_api_url =
            lookup("REMOTE_API_URL").unwrap_or_else(|| format!("http://{}:{}", host, port));
        let registration_refresh_delay = lookup("REGISTRATION_REFRESH_DELAY_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_REFRESH_DELAY);

        Self {
            database_url,
            host,
            port,
            remote_api_url,
            registration_refresh_delay,
        }
    }
}
