use std::path::PathBuf;

use serde::Deserialize;

use crate::weather::dto::Coordinates;

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
    pub alerts_lat: f64,
    pub alerts_lon: f64,
}

impl WeatherConfig {
    pub fn alerts_at(&self) -> Coordinates {
        Coordinates {
            lat: self.alerts_lat,
            lon: self.alerts_lon,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub upload_dir: PathBuf,
    pub static_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub session_ttl_minutes: i64,
    pub cookie_secure: bool,
    pub weather: WeatherConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let weather = WeatherConfig {
            // older deployments used a misspelled key
            api_key: std::env::var("WEATHER_API_KEY")
                .or_else(|_| std::env::var("WEATHER_API_kEY"))
                .ok()
                .filter(|k| !k.trim().is_empty()),
            base_url: std::env::var("WEATHER_BASE_URL")
                .unwrap_or_else(|_| "https://api.openweathermap.org".into()),
            timeout_secs: parse_or("WEATHER_TIMEOUT_SECS", 10),
            alerts_lat: parse_or("ALERTS_LAT", 17.3850),
            alerts_lon: parse_or("ALERTS_LON", 78.4867),
        };
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://smartkrishi.db".into()),
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", 5),
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "uploads".into())
                .into(),
            static_dir: std::env::var("STATIC_DIR")
                .unwrap_or_else(|_| "static".into())
                .into(),
            max_upload_bytes: parse_or("MAX_UPLOAD_BYTES", 20 * 1024 * 1024),
            session_ttl_minutes: parse_or("SESSION_TTL_MINUTES", 60 * 24),
            cookie_secure: parse_or("COOKIE_SECURE", false),
            weather,
        })
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
