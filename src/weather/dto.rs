use serde::Deserialize;

/// Current-weather payload (only the fields the portal reads).
#[derive(Debug, Deserialize)]
pub struct OwmCurrent {
    #[serde(default)]
    pub name: Option<String>,
    pub main: OwmMain,
    #[serde(default)]
    pub weather: Vec<OwmCondition>,
}

#[derive(Debug, Deserialize)]
pub struct OwmMain {
    pub temp: f64,
    pub humidity: f64,
}

#[derive(Debug, Deserialize)]
pub struct OwmCondition {
    pub description: String,
}

/// One-call payload; only alerts are requested.
#[derive(Debug, Default, Deserialize)]
pub struct OwmOneCall {
    #[serde(default)]
    pub alerts: Vec<WeatherAlert>,
}

/// Government weather alert as published by the provider.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct WeatherAlert {
    pub sender_name: String,
    pub event: String,
    pub start: i64,
    pub end: i64,
    pub description: String,
}

/// Provider-neutral current conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct Conditions {
    pub city: Option<String>,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Default for Coordinates {
    /// Hyderabad.
    fn default() -> Self {
        Self {
            lat: 17.3850,
            lon: 78.4867,
        }
    }
}

/// Dashboard weather card. Always displayable, placeholders included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherSummary {
    pub temperature: String,
    pub humidity: String,
    pub description: String,
}

impl WeatherSummary {
    pub fn placeholder() -> Self {
        Self {
            temperature: "--".into(),
            humidity: "--".into(),
            description: "Unavailable".into(),
        }
    }
}

/// Result card of the `/weather` city lookup page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityWeather {
    pub city: String,
    pub temperature: String,
    pub humidity: String,
    pub condition: String,
}

impl CityWeather {
    pub fn unavailable(city: &str) -> Self {
        Self {
            city: city.to_string(),
            temperature: "--".into(),
            humidity: "--".into(),
            condition: "Unavailable / అందుబాటులో లేదు".into(),
        }
    }
}
