//! Country facts lookup (REST Countries)

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::error::ToolError;
use crate::registry::{Capability, ToolParams};

const RESTCOUNTRIES_BASE_URL: &str = "https://restcountries.com/v3.1/name";

/// Timeout for country requests (5 seconds)
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// REST Countries lookup capability
pub struct CountryTool {
    client: reqwest::Client,
}

impl CountryTool {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client }
    }
}

impl Default for CountryTool {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct CountryRecord {
    name: CountryName,
    #[serde(default)]
    capital: Vec<String>,
    #[serde(default)]
    population: u64,
    #[serde(default)]
    region: String,
    #[serde(default)]
    area: f64,
}

#[derive(Debug, Deserialize)]
struct CountryName {
    common: String,
}

#[async_trait]
impl Capability for CountryTool {
    async fn invoke(&self, params: &ToolParams) -> Result<String, ToolError> {
        let country = params
            .get("country")
            .ok_or_else(|| ToolError::new("missing parameter: country"))?;

        let url = format!("{}/{}", RESTCOUNTRIES_BASE_URL, country);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ToolError::new(format!("Could not find '{}'", country)));
        }

        let data: Vec<CountryRecord> = response.json().await?;
        let record = data
            .first()
            .ok_or_else(|| ToolError::new(format!("Could not find '{}'", country)))?;

        let capital = record.capital.first().map(String::as_str).unwrap_or("N/A");

        Ok(format!(
            "{}: Capital - {}, Population - {}, Region - {}, Area - {} km²",
            record.name.common,
            capital,
            group_thousands(record.population),
            record.region,
            group_thousands(record.area.round() as u64)
        ))
    }
}

/// 1234567 -> "1,234,567"
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(67390000), "67,390,000");
    }

    #[tokio::test]
    async fn missing_parameter_is_an_error() {
        let tool = CountryTool::new();
        let err = tool.invoke(&HashMap::new()).await.unwrap_err();
        assert!(err.message.contains("country"));
    }
}
