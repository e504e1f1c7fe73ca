//! Display-side weather lookups. None of these fail: provider trouble is logged and turned
//! into placeholder values.

use tracing::warn;

use super::{
    client::WeatherProvider,
    dto::{CityWeather, Conditions, Coordinates, WeatherAlert, WeatherSummary},
};

/// Weather card for a farmer's village.
pub async fn get_weather(provider: &dyn WeatherProvider, city: &str) -> WeatherSummary {
    match provider.current(city).await {
        Ok(c) => WeatherSummary {
            temperature: format!("{}°C", c.temperature_c),
            humidity: format!("{}%", c.humidity_pct),
            description: capitalize(&c.description),
        },
        Err(e) => {
            warn!(error = %e, %city, "weather lookup failed, showing placeholders");
            WeatherSummary::placeholder()
        }
    }
}

/// Active alerts around `at`, or around Hyderabad when no coordinate is given.
pub async fn get_weather_alerts(
    provider: &dyn WeatherProvider,
    at: Option<Coordinates>,
) -> Vec<WeatherAlert> {
    let at = at.unwrap_or_default();
    provider.alerts(at).await.unwrap_or_else(|e| {
        warn!(error = %e, lat = at.lat, lon = at.lon, "weather alerts unavailable");
        Vec::new()
    })
}

/// Result card for the city lookup page.
pub async fn lookup_city(provider: &dyn WeatherProvider, city: &str) -> CityWeather {
    match provider.current(city).await {
        Ok(Conditions {
            city: resolved,
            temperature_c,
            humidity_pct,
            description,
        }) => CityWeather {
            city: resolved.unwrap_or_else(|| city.to_string()),
            temperature: format!("{temperature_c}°C"),
            humidity: format!("{humidity_pct}%"),
            condition: capitalize(&description),
        },
        Err(e) => {
            warn!(error = %e, %city, "city weather lookup failed");
            CityWeather::unavailable(city)
        }
    }
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::client::WeatherError;
    use async_trait::async_trait;

    struct Sunny;

    #[async_trait]
    impl WeatherProvider for Sunny {
        async fn current(&self, _city: &str) -> Result<Conditions, WeatherError> {
            Ok(Conditions {
                city: Some("Warangal".into()),
                temperature_c: 30.0,
                humidity_pct: 45.0,
                description: "CLEAR sky".into(),
            })
        }

        async fn alerts(&self, at: Coordinates) -> Result<Vec<WeatherAlert>, WeatherError> {
            Ok(vec![WeatherAlert {
                event: format!("heat at {},{}", at.lat, at.lon),
                ..Default::default()
            }])
        }
    }

    struct Down;

    #[async_trait]
    impl WeatherProvider for Down {
        async fn current(&self, _city: &str) -> Result<Conditions, WeatherError> {
            Err(WeatherError::Status(401, "Invalid API key".into()))
        }

        async fn alerts(&self, _at: Coordinates) -> Result<Vec<WeatherAlert>, WeatherError> {
            Err(WeatherError::Network("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn summary_formats_units_and_description() {
        let w = get_weather(&Sunny, "warangal").await;
        assert_eq!(
            w,
            WeatherSummary {
                temperature: "30°C".into(),
                humidity: "45%".into(),
                description: "Clear sky".into(),
            }
        );
    }

    #[tokio::test]
    async fn failures_degrade_to_placeholders() {
        assert_eq!(get_weather(&Down, "x").await, WeatherSummary::placeholder());
        assert!(get_weather_alerts(&Down, None).await.is_empty());

        let card = lookup_city(&Down, "Nowhere").await;
        assert_eq!(card, CityWeather::unavailable("Nowhere"));
        assert!(card.condition.contains("అందుబాటులో లేదు"));
    }

    #[tokio::test]
    async fn alerts_default_to_hyderabad() {
        let alerts = get_weather_alerts(&Sunny, None).await;
        assert_eq!(alerts[0].event, "heat at 17.385,78.4867");

        let alerts = get_weather_alerts(&Sunny, Some(Coordinates { lat: 1.5, lon: 2.0 })).await;
        assert_eq!(alerts[0].event, "heat at 1.5,2");
    }

    #[tokio::test]
    async fn city_lookup_prefers_provider_name() {
        let card = lookup_city(&Sunny, "warangal").await;
        assert_eq!(card.city, "Warangal");
        assert_eq!(card.temperature, "30°C");
    }

    #[test]
    fn capitalize_matches_sentence_case() {
        assert_eq!(capitalize("light rain"), "Light rain");
        assert_eq!(capitalize("OVERCAST CLOUDS"), "Overcast clouds");
        assert_eq!(capitalize(""), "");
    }
}
