use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WeatherCondition {
    #[default]
    Clear,
    Clouds,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Showers,
    Thunderstorm,
    Other,
}

impl WeatherCondition {
    /// Map a WMO weather interpretation code (Open-Meteo `weathercode`).
    pub fn from_wmo_code(code: u32) -> Self {
        match code {
            0 => WeatherCondition::Clear,
            1..=3 => WeatherCondition::Clouds,
            45 | 48 => WeatherCondition::Fog,
            51..=57 => WeatherCondition::Drizzle,
            61..=67 => WeatherCondition::Rain,
            71..=77 => WeatherCondition::Snow,
            80..=82 => WeatherCondition::Showers,
            85 | 86 => WeatherCondition::Snow,
            95..=99 => WeatherCondition::Thunderstorm,
            _ => WeatherCondition::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::Clouds => "Cloudy",
            WeatherCondition::Fog => "Fog",
            WeatherCondition::Drizzle => "Drizzle",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Showers => "Showers",
            WeatherCondition::Thunderstorm => "Thunderstorm",
            WeatherCondition::Other => "Other",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "☀",
            WeatherCondition::Clouds => "☁",
            WeatherCondition::Fog => "🌫",
            WeatherCondition::Drizzle => "🌦",
            WeatherCondition::Rain => "🌧",
            WeatherCondition::Snow => "❄",
            WeatherCondition::Showers => "🌧",
            WeatherCondition::Thunderstorm => "⛈",
            WeatherCondition::Other => "?",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current outdoor conditions at the farm coordinate, as reported by the
/// weather collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub fetched_at: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub condition: WeatherCondition,
    /// Relative humidity for the current hour, when the hourly series
    /// covers it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precipitation_probability: Option<f64>,
}
