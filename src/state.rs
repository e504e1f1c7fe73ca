use std::{path::PathBuf, sync::Arc};

use crate::config::{AppConfig, WeatherConfig};
use crate::db;
use crate::storage::UploadStore;
use crate::weather::client::{OpenWeatherClient, WeatherProvider};

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::SqlitePool,
    pub config: Arc<AppConfig>,
    pub weather: Arc<dyn WeatherProvider>,
    pub uploads: UploadStore,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        if config.weather.api_key.is_none() {
            tracing::warn!("WEATHER_API_KEY not set; weather will show placeholders");
        }

        let db = db::connect(&config).await?;
        let uploads = UploadStore::open(&config.upload_dir).await?;
        let weather = Arc::new(OpenWeatherClient::new(&config.weather)?) as Arc<dyn WeatherProvider>;

        Ok(Self {
            db,
            config,
            weather,
            uploads,
        })
    }

    pub fn from_parts(
        db: sqlx::SqlitePool,
        config: Arc<AppConfig>,
        weather: Arc<dyn WeatherProvider>,
        uploads: UploadStore,
    ) -> Self {
        Self {
            db,
            config,
            weather,
            uploads,
        }
    }

    /// In-memory database, uploads under `upload_dir`, no weather API key.
    pub async fn fake(upload_dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let upload_dir = upload_dir.into();
        let config = Arc::new(AppConfig {
            database_url: "sqlite::memory:".into(),
            db_max_connections: 1,
            static_dir: upload_dir.join("static"),
            upload_dir: upload_dir.clone(),
            max_upload_bytes: 1024 * 1024,
            session_ttl_minutes: 60,
            cookie_secure: false,
            weather: WeatherConfig {
                api_key: None,
                base_url: "http://127.0.0.1:9".into(),
                timeout_secs: 1,
                alerts_lat: 17.3850,
                alerts_lon: 78.4867,
            },
        });

        let db = db::connect_in_memory().await?;
        let uploads = UploadStore::open(upload_dir).await?;
        let weather = Arc::new(OpenWeatherClient::new(&config.weather)?) as Arc<dyn WeatherProvider>;
        Ok(Self::from_parts(db, config, weather, uploads))
    }
}
