//! Current date and time

use async_trait::async_trait;

use crate::error::ToolError;
use crate::registry::{Capability, ToolParams};

/// Local clock capability; takes no parameters
pub struct ClockTool;

impl ClockTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClockTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Capability for ClockTool {
    async fn invoke(&self, _params: &ToolParams) -> Result<String, ToolError> {
        let now = chrono::Local::now();
        Ok(format!("Current: {}", now.format("%A, %B %d, %Y at %H:%M:%S")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[tokio::test]
    async fn reports_the_current_time() {
        let tool = ClockTool::new();
        let result = tool.invoke(&HashMap::new()).await.unwrap();
        assert!(result.starts_with("Current: "));
        // weekday name, month name, "at", clock time
        assert!(result.contains(" at "));
    }
}
