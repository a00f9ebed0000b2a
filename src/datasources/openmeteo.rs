use crate::error::{FarmSightError, Result};
use crate::models::{CurrentConditions, WeatherCondition};
use chrono::Utc;
use serde::Deserialize;

const API_BASE_URL: &str = "https://api.open-meteo.com/v1";

/// Weather boundary collaborator. One request per call, no retries, no
/// caching; failures surface as `DataSourceUnavailable`.
pub struct OpenMeteoClient {
    client: reqwest::Client,
    latitude: f64,
    longitude: f64,
}

// Open-Meteo API response structures
#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current_weather: OmCurrentWeather,
    #[serde(default)]
    hourly: Option<OmHourly>,
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: u32,
    time: String,
}

#[derive(Debug, Deserialize)]
struct OmHourly {
    time: Vec<String>,
    #[serde(rename = "relativehumidity_2m", default)]
    relative_humidity: Vec<f64>,
    #[serde(rename = "precipitation_probability", default)]
    precipitation_probability: Vec<f64>,
}

impl OpenMeteoClient {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            client: reqwest::Client::new(),
            latitude,
            longitude,
        }
    }

    /// Fetch current conditions plus the hourly humidity series and
    /// pick out the values for the current hour.
    pub async fn fetch_current(&self) -> Result<CurrentConditions> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&current_weather=true&hourly=relativehumidity_2m,precipitation_probability",
            API_BASE_URL, self.latitude, self.longitude
        );

        tracing::debug!("fetching weather from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FarmSightError::DataSourceUnavailable(format!("Open-Meteo: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FarmSightError::DataSourceUnavailable(format!(
                "Open-Meteo returned {status}: {body}"
            )));
        }

        let om_response: OmForecastResponse = response.json().await.map_err(|e| {
            FarmSightError::DataSourceUnavailable(format!(
                "Failed to parse Open-Meteo response: {e}"
            ))
        })?;

        Ok(self.convert_response(om_response))
    }

    /// Test connection to the Open-Meteo API
    pub async fn test_connection(&self) -> Result<bool> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&current_weather=true",
            API_BASE_URL, self.latitude, self.longitude
        );

        let response = self.client.get(&url).send().await?;
        Ok(response.status().is_success())
    }

    fn convert_response(&self, response: OmForecastResponse) -> CurrentConditions {
        let current = response.current_weather;

        let (humidity_percent, precipitation_probability) = response
            .hourly
            .as_ref()
            .map(|hourly| {
                (
                    series_value_at(&hourly.time, &hourly.relative_humidity, &current.time),
                    series_value_at(
                        &hourly.time,
                        &hourly.precipitation_probability,
                        &current.time,
                    ),
                )
            })
            .unwrap_or((None, None));

        CurrentConditions {
            fetched_at: Utc::now(),
            latitude: self.latitude,
            longitude: self.longitude,
            temperature_c: current.temperature,
            wind_speed_kmh: current.windspeed,
            condition: WeatherCondition::from_wmo_code(current.weathercode),
            humidity_percent,
            precipitation_probability,
        }
    }
}

/// Pick the series value for the hour the current-weather timestamp
/// falls in. Open-Meteo timestamps look like `2026-08-08T14:00`; the
/// current-weather time carries minutes, so compare on the hour prefix.
fn series_value_at(times: &[String], values: &[f64], current_time: &str) -> Option<f64> {
    let hour_prefix = current_time.get(..13)?;
    let index = times.iter().position(|t| t.starts_with(hour_prefix))?;
    values.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_lookup_matches_hour_prefix() {
        let times = vec![
            "2026-08-08T13:00".to_string(),
            "2026-08-08T14:00".to_string(),
            "2026-08-08T15:00".to_string(),
        ];
        let values = vec![55.0, 62.0, 70.0];

        assert_eq!(
            series_value_at(&times, &values, "2026-08-08T14:15"),
            Some(62.0)
        );
        assert_eq!(
            series_value_at(&times, &values, "2026-08-08T15:00"),
            Some(70.0)
        );
    }

    #[test]
    fn series_lookup_misses_gracefully() {
        let times = vec!["2026-08-08T13:00".to_string()];
        let values = vec![55.0];

        assert_eq!(series_value_at(&times, &values, "2026-08-09T13:00"), None);
        assert_eq!(series_value_at(&times, &values, "bad"), None);
        // Ragged response: time present but value missing.
        assert_eq!(series_value_at(&times, &[], "2026-08-08T13:00"), None);
    }

    #[test]
    fn client_creation() {
        let client = OpenMeteoClient::new(37.44, 127.14);
        assert_eq!(client.latitude, 37.44);
        assert_eq!(client.longitude, 127.14);
    }
}
