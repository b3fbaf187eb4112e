//! Error types for the classification and approval engine
//!
//! Tool and model failures are caught and rendered into the conversation;
//! gate errors indicate a caller bug and are surfaced loudly.

use thiserror::Error;

/// A capability failed during execution.
///
/// Carries a human-readable message; the executor renders it into the
/// conversation as `"Error: <message>"` and never propagates it further.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ToolError {
    pub message: String,
}

impl ToolError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ToolError {
    fn from(err: reqwest::Error) -> Self {
        ToolError::new(err.to_string())
    }
}

/// The fallback language model failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ModelError {
    pub message: String,
}

impl ModelError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ModelError {
    fn from(err: reqwest::Error) -> Self {
        ModelError::new(err.to_string())
    }
}

/// An approval-gate operation was attempted in the wrong state.
///
/// These are precondition violations in the caller, not user-facing
/// conditions: the surrounding shell must refuse new input while an
/// invocation is pending.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("cannot stage a new invocation while another is pending approval")]
    AlreadyPending,
    #[error("no invocation is pending approval")]
    NothingPending,
    #[error("pending invocation has no parameter named '{0}'")]
    UnknownField(String),
}

/// Tool registry lookup failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),
}
