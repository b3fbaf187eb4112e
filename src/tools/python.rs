//! Restricted Python program execution
//!
//! Runs generated programs in a subprocess with:
//! - isolated-mode interpreter (`-I`: no site packages, no user path)
//! - wall-clock timeout, process killed on expiry
//! - output size limit

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

use crate::config::RunnerConfig;
use crate::error::ToolError;
use crate::registry::{Capability, ToolParams};

/// Maximum captured output size (1 MB)
const MAX_OUTPUT_SIZE: usize = 1024 * 1024;

/// Python subprocess capability
pub struct PythonTool {
    config: RunnerConfig,
}

impl PythonTool {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Capability for PythonTool {
    async fn invoke(&self, params: &ToolParams) -> Result<String, ToolError> {
        let code = params
            .get("code")
            .ok_or_else(|| ToolError::new("missing parameter: code"))?;

        let start = std::time::Instant::now();

        let mut cmd = Command::new(&self.config.interpreter);
        cmd.arg("-I")
            .arg("-c")
            .arg(code)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd
            .spawn()
            .map_err(|e| ToolError::new(format!("failed to start {}: {}", self.config.interpreter, e)))?;

        let wait = Duration::from_secs(self.config.timeout_secs);
        let output = match timeout(wait, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => return Err(ToolError::new(format!("failed to read program output: {}", e))),
            Err(_) => {
                tracing::warn!(
                    timeout_secs = self.config.timeout_secs,
                    "Program timed out, process killed"
                );
                return Err(ToolError::new(format!(
                    "execution timed out after {}s",
                    self.config.timeout_secs
                )));
            }
        };

        tracing::info!(
            exit_code = ?output.status.code(),
            duration_ms = %start.elapsed().as_millis(),
            "Program finished"
        );

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // Last line of a Python traceback is the actual error
            let message = stderr
                .lines()
                .rev()
                .find(|l| !l.trim().is_empty())
                .unwrap_or("program exited with an error")
                .trim()
                .to_string();
            return Err(ToolError::new(message));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stdout = if stdout.len() > MAX_OUTPUT_SIZE {
            format!(
                "{}...[truncated, total: {} bytes]",
                &stdout[..MAX_OUTPUT_SIZE],
                stdout.len()
            )
        } else {
            stdout.to_string()
        };

        if stdout.trim().is_empty() {
            Ok("Code executed successfully (no output)".to_string())
        } else {
            Ok(stdout)
        }
    }
}

/// Check whether an interpreter exists in PATH
pub async fn interpreter_exists(interpreter: &str) -> bool {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(format!("where {} >nul 2>nul", interpreter));
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c")
            .arg(format!("command -v {} >/dev/null 2>&1", interpreter));
        c
    };

    match cmd.output().await {
        Ok(output) => output.status.success(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn params_for(code: &str) -> ToolParams {
        let mut params = HashMap::new();
        params.insert("code".to_string(), code.to_string());
        params
    }

    #[tokio::test]
    async fn captures_program_output() {
        if !interpreter_exists("python3").await {
            return;
        }
        let tool = PythonTool::new(RunnerConfig::default());
        let result = tool.invoke(&params_for("print(6 * 7)")).await.unwrap();
        assert_eq!(result.trim(), "42");
    }

    #[tokio::test]
    async fn silent_success_gets_a_placeholder() {
        if !interpreter_exists("python3").await {
            return;
        }
        let tool = PythonTool::new(RunnerConfig::default());
        let result = tool.invoke(&params_for("x = 1")).await.unwrap();
        assert_eq!(result, "Code executed successfully (no output)");
    }

    #[tokio::test]
    async fn failing_program_reports_the_error_line() {
        if !interpreter_exists("python3").await {
            return;
        }
        let tool = PythonTool::new(RunnerConfig::default());
        let err = tool.invoke(&params_for("1 / 0")).await.unwrap_err();
        assert!(err.message.contains("ZeroDivisionError"), "{}", err.message);
    }

    #[tokio::test]
    async fn runaway_program_is_killed() {
        if !interpreter_exists("python3").await {
            return;
        }
        let tool = PythonTool::new(RunnerConfig {
            timeout_secs: 1,
            ..RunnerConfig::default()
        });
        let err = tool
            .invoke(&params_for("while True:\n    pass"))
            .await
            .unwrap_err();
        assert!(err.message.contains("timed out"));
    }
}
