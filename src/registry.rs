//! Tool registry
//!
//! Static catalog of the capabilities the agent can dispatch to. Populated
//! once at startup from the configuration; descriptors carry no mutable
//! state and there is no runtime registration.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{RegistryError, ToolError};
use crate::tools::{
    calculator::CalculatorTool, clock::ClockTool, country::CountryTool, crypto::CryptoTool,
    python::PythonTool, weather::WeatherTool,
};

/// Named string parameters for one tool invocation
pub type ToolParams = HashMap<String, String>;

/// An external capability: named string parameters in, one string out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Capability: Send + Sync {
    async fn invoke(&self, params: &ToolParams) -> Result<String, ToolError>;
}

/// Tool name constants, shared by the registry and the classifier
pub const PYTHON: &str = "python";
pub const CALCULATOR: &str = "calculator";
pub const WEATHER: &str = "weather";
pub const CRYPTO: &str = "crypto";
pub const COUNTRY: &str = "country";
pub const TIME: &str = "time";

/// Descriptor for one registered tool
#[derive(Clone)]
pub struct ToolDescriptor {
    name: String,
    description: String,
    parameter_names: Vec<String>,
    capability: Arc<dyn Capability>,
}

impl ToolDescriptor {
    pub fn new(
        name: &str,
        description: &str,
        parameter_names: &[&str],
        capability: Arc<dyn Capability>,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            parameter_names: parameter_names.iter().map(|p| p.to_string()).collect(),
            capability,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Ordered parameter schema for this tool
    pub fn parameter_names(&self) -> &[String] {
        &self.parameter_names
    }

    /// Invoke the underlying capability
    pub async fn invoke(&self, params: &ToolParams) -> Result<String, ToolError> {
        self.capability.invoke(params).await
    }
}

impl std::fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("parameter_names", &self.parameter_names)
            .finish()
    }
}

/// The full, fixed set of available tools
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    /// Build the registry from configuration
    pub fn new(config: &Config) -> Self {
        let tools = vec![
            ToolDescriptor::new(
                PYTHON,
                "Run a Python program in a restricted interpreter",
                &["code"],
                Arc::new(PythonTool::new(config.runner.clone())),
            ),
            ToolDescriptor::new(
                CALCULATOR,
                "Evaluate an arithmetic expression",
                &["expression"],
                Arc::new(CalculatorTool::new()),
            ),
            ToolDescriptor::new(
                WEATHER,
                "Current weather for a city (OpenWeatherMap)",
                &["city"],
                Arc::new(WeatherTool::new(config.weather.api_key.clone())),
            ),
            ToolDescriptor::new(
                CRYPTO,
                "Cryptocurrency spot price (CoinGecko)",
                &["crypto"],
                Arc::new(CryptoTool::new()),
            ),
            ToolDescriptor::new(
                COUNTRY,
                "Country facts: capital, population, region, area",
                &["country"],
                Arc::new(CountryTool::new()),
            ),
            ToolDescriptor::new(TIME, "Current date and time", &[], Arc::new(ClockTool::new())),
        ];
        Self { tools }
    }

    /// Build a registry from an explicit descriptor list
    pub fn with_tools(tools: Vec<ToolDescriptor>) -> Self {
        Self { tools }
    }

    /// Look up a tool by name
    pub fn lookup(&self, name: &str) -> Result<&ToolDescriptor, RegistryError> {
        self.tools
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| RegistryError::UnknownTool(name.to_string()))
    }

    /// All registered descriptors, in registration order
    pub fn descriptors(&self) -> &[ToolDescriptor] {
        &self.tools
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_holds_the_fixed_tool_set() {
        let registry = ToolRegistry::new(&Config::default());
        let names: Vec<&str> = registry.descriptors().iter().map(|t| t.name()).collect();
        assert_eq!(
            names,
            vec![PYTHON, CALCULATOR, WEATHER, CRYPTO, COUNTRY, TIME]
        );
    }

    #[test]
    fn lookup_unknown_tool_fails() {
        let registry = ToolRegistry::new(&Config::default());
        let err = registry.lookup("telepathy").unwrap_err();
        assert_eq!(err, RegistryError::UnknownTool("telepathy".to_string()));
    }

    #[test]
    fn parameter_schemas_match_the_capabilities() {
        let registry = ToolRegistry::new(&Config::default());
        assert_eq!(registry.lookup(PYTHON).unwrap().parameter_names(), ["code"]);
        assert_eq!(
            registry.lookup(CALCULATOR).unwrap().parameter_names(),
            ["expression"]
        );
        assert_eq!(registry.lookup(WEATHER).unwrap().parameter_names(), ["city"]);
        assert_eq!(registry.lookup(CRYPTO).unwrap().parameter_names(), ["crypto"]);
        assert_eq!(
            registry.lookup(COUNTRY).unwrap().parameter_names(),
            ["country"]
        );
        assert!(registry.lookup(TIME).unwrap().parameter_names().is_empty());
    }
}
