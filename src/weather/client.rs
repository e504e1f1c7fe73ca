use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::config::WeatherConfig;

use super::dto::{Conditions, Coordinates, OwmCurrent, OwmOneCall, WeatherAlert};

const USER_AGENT: &str = concat!("smartkrishi/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather API key is not configured")]
    MissingApiKey,

    #[error("network error: {0}")]
    Network(String),

    #[error("weather API returned {0}: {1}")]
    Status(u16, String),

    #[error("malformed weather payload: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, city: &str) -> Result<Conditions, WeatherError>;
    async fn alerts(&self, at: Coordinates) -> Result<Vec<WeatherAlert>, WeatherError>;
}

/// OpenWeatherMap client (current weather v2.5, one-call v3.0).
pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenWeatherClient {
    pub fn new(config: &WeatherConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("build weather http client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, WeatherError> {
        let key = self.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;

        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(params)
            .query(&[("appid", key), ("units", "metric")])
            .send()
            .await
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::Status(status.as_u16(), body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| WeatherError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, city: &str) -> Result<Conditions, WeatherError> {
        debug!(%city, "querying current weather");
        let payload: OwmCurrent = self
            .get_json("/data/2.5/weather", &[("q", city.to_string())])
            .await?;
        conditions_from(payload)
    }

    async fn alerts(&self, at: Coordinates) -> Result<Vec<WeatherAlert>, WeatherError> {
        debug!(lat = at.lat, lon = at.lon, "querying weather alerts");
        let payload: OwmOneCall = self
            .get_json(
                "/data/3.0/onecall",
                &[
                    ("lat", at.lat.to_string()),
                    ("lon", at.lon.to_string()),
                    ("exclude", "minutely,hourly,daily".to_string()),
                ],
            )
            .await?;
        Ok(payload.alerts)
    }
}

pub(crate) fn conditions_from(payload: OwmCurrent) -> Result<Conditions, WeatherError> {
    let description = payload
        .weather
        .into_iter()
        .next()
        .map(|w| w.description)
        .ok_or_else(|| WeatherError::Malformed("empty weather list".into()))?;

    Ok(Conditions {
        city: payload.name.filter(|n| !n.is_empty()),
        temperature_c: payload.main.temp,
        humidity_pct: payload.main.humidity,
        description,
    })
}
