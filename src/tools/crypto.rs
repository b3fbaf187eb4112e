//! Cryptocurrency spot price lookup (CoinGecko)

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::ToolError;
use crate::registry::{Capability, ToolParams};

const COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3/simple/price";

/// Timeout for price requests (5 seconds)
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// CoinGecko simple-price capability
pub struct CryptoTool {
    client: reqwest::Client,
}

impl CryptoTool {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client }
    }
}

impl Default for CryptoTool {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct PriceEntry {
    usd: f64,
    #[serde(default)]
    usd_24h_change: f64,
}

#[async_trait]
impl Capability for CryptoTool {
    async fn invoke(&self, params: &ToolParams) -> Result<String, ToolError> {
        let asset = params
            .get("crypto")
            .ok_or_else(|| ToolError::new("missing parameter: crypto"))?
            .to_lowercase();

        let response = self
            .client
            .get(COINGECKO_BASE_URL)
            .query(&[
                ("ids", asset.as_str()),
                ("vs_currencies", "usd"),
                ("include_24hr_change", "true"),
            ])
            .send()
            .await?;

        let data: HashMap<String, PriceEntry> = response.json().await?;

        match data.get(&asset) {
            Some(entry) => {
                let trend = if entry.usd_24h_change > 0.0 { "📈" } else { "📉" };
                Ok(format!(
                    "{}: ${:.2} USD {} ({:.2}% 24h)",
                    capitalize(&asset),
                    entry.usd,
                    trend,
                    entry.usd_24h_change
                ))
            }
            // A miss is an answer, not a failure
            None => Ok(format!(
                "'{}' not found. Try: bitcoin, ethereum, cardano, solana",
                asset
            )),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
