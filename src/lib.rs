//! Toolgate — multi-tool agent with a human approval gate
//!
//! Routes free-text requests to callable tools through a deterministic
//! keyword cascade, with:
//! - a fixed tool registry (Python runner, calculator, weather, crypto,
//!   country, time) built from explicit configuration
//! - a single-slot approval gate: every tool call is staged for a human to
//!   edit, approve, or cancel before it runs
//! - an append-only conversation log shared by the tool and fallback paths
//! - a Groq chat fallback for queries no tool matches
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use toolgate::{Config, Session, ToolRegistry, TurnOutcome};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let registry = Arc::new(ToolRegistry::new(&Config::load()?));
//!     let mut session = Session::new(registry);
//!     if let TurnOutcome::AwaitingApproval = session.submit("125 * 48").await? {
//!         let result = session.approve().await?;
//!         println!("{}", result);
//!     }
//!     Ok(())
//! }
//! ```

pub mod approval;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod conversation;
pub mod error;
pub mod executor;
pub mod llm;
pub mod registry;
pub mod session;
pub mod tools;
pub mod types;

// Re-export commonly used types for convenience
pub use approval::{ApprovalGate, ApprovalState, InvocationDraft};
pub use classifier::classify;
pub use config::Config;
pub use conversation::Conversation;
pub use error::{GateError, ModelError, RegistryError, ToolError};
pub use registry::{Capability, ToolDescriptor, ToolParams, ToolRegistry};
pub use session::{Session, TurnOutcome};
pub use types::{Message, Role};
