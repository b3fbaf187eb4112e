//! Current weather lookup (OpenWeatherMap)

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::error::ToolError;
use crate::registry::{Capability, ToolParams};

const WEATHER_BASE_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Timeout for weather requests (5 seconds)
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// OpenWeatherMap current-weather capability
pub struct WeatherTool {
    api_key: Option<String>,
    client: reqwest::Client,
}

impl WeatherTool {
    pub fn new(api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { api_key, client }
    }
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: MainReadings,
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    feels_like: f64,
    humidity: u32,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: Option<String>,
}

#[async_trait]
impl Capability for WeatherTool {
    async fn invoke(&self, params: &ToolParams) -> Result<String, ToolError> {
        let city = params
            .get("city")
            .ok_or_else(|| ToolError::new("missing parameter: city"))?;

        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ToolError::new("Weather API key not configured."))?;

        let response = self
            .client
            .get(WEATHER_BASE_URL)
            .query(&[("q", city.as_str()), ("appid", api_key), ("units", "metric")])
            .send()
            .await?;

        if !response.status().is_success() {
            let err: ApiError = response.json().await.unwrap_or(ApiError { message: None });
            return Err(ToolError::new(
                err.message.unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }

        let data: WeatherResponse = response.json().await?;
        let description = data
            .weather
            .first()
            .map(|w| w.description.as_str())
            .unwrap_or("unknown");

        Ok(format!(
            "Weather in {}: {}°C (feels like {}°C), {}, Humidity: {}%",
            city, data.main.temp, data.main.feels_like, description, data.main.humidity
        ))
    }
}
