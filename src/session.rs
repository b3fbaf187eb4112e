//! Per-conversation engine
//!
//! Owns the conversation log and the approval gate, and drives the turn
//! protocol: classify, stage, wait for an explicit approve or cancel, then
//! record. One query is resolved before the next is accepted; sessions
//! share no mutable state with each other.

use std::sync::Arc;

use crate::approval::{ApprovalGate, InvocationDraft};
use crate::classifier;
use crate::conversation::Conversation;
use crate::error::GateError;
use crate::executor;
use crate::llm::FallbackModel;
use crate::registry::ToolRegistry;
use crate::types::{Message, Role};

/// Reply when no category matches and no model is configured
pub const NO_MATCH_REPLY: &str = "I couldn't match that to a specific tool. Try:\n\n\
🐍 Python: count characters, factorial, fibonacci, prime numbers, palindrome, even/odd, reverse, square, cube, sum, average\n\
🧮 Calculator: 5+3, 10*2, 125/5\n\
🌤️ Weather: weather in [city]\n\
💰 Crypto: bitcoin price, ethereum price\n\
🌍 Country: capital of [country]\n\
🕐 Time: what time is it?";

/// Notice recorded when a pending invocation is cancelled
pub const CANCELLED_REPLY: &str = "❌ Tool execution cancelled by user";

/// What a submitted query turned into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A draft is staged; approve or cancel before submitting again
    AwaitingApproval,
    /// The fallback path answered directly, bypassing the gate
    Replied(String),
}

/// One conversation with its approval slot
pub struct Session {
    registry: Arc<ToolRegistry>,
    fallback: Option<Arc<dyn FallbackModel>>,
    gate: ApprovalGate,
    conversation: Conversation,
}

impl Session {
    /// Session without a model: unmatched queries get the static hint
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            fallback: None,
            gate: ApprovalGate::new(),
            conversation: Conversation::new(),
        }
    }

    /// Session with a conversational fallback model
    pub fn with_fallback(registry: Arc<ToolRegistry>, fallback: Arc<dyn FallbackModel>) -> Self {
        Self {
            fallback: Some(fallback),
            ..Self::new(registry)
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn is_pending(&self) -> bool {
        self.gate.is_pending()
    }

    /// The draft currently awaiting approval, if any
    pub fn pending(&self) -> Option<&InvocationDraft> {
        self.gate.pending()
    }

    /// Handle one user query.
    ///
    /// Refused while an invocation is pending: the caller must resolve the
    /// approval first. Otherwise the query is recorded, classified, and
    /// either staged for approval or answered through the fallback path.
    pub async fn submit(&mut self, text: &str) -> Result<TurnOutcome, GateError> {
        if self.gate.is_pending() {
            return Err(GateError::AlreadyPending);
        }

        self.conversation.add_message(Role::User, text);

        match classifier::classify(text, self.registry.as_ref()) {
            Some(draft) => {
                self.gate.stage(draft)?;
                Ok(TurnOutcome::AwaitingApproval)
            }
            None => {
                let reply = self.fallback_reply(text).await;
                self.conversation.add_message(Role::Assistant, reply.clone());
                Ok(TurnOutcome::Replied(reply))
            }
        }
    }

    async fn fallback_reply(&self, text: &str) -> String {
        match &self.fallback {
            Some(model) => match model.respond(text).await {
                Ok(reply) => reply,
                Err(err) => {
                    tracing::warn!(error = %err, "Fallback model failed");
                    format!("Error: {}", err)
                }
            },
            None => NO_MATCH_REPLY.to_string(),
        }
    }

    /// Rewrite one parameter of the pending draft before approval
    pub fn edit(&mut self, field: &str, value: impl Into<String>) -> Result<(), GateError> {
        self.gate.edit(field, value)
    }

    /// Approve the pending invocation and execute it with the final
    /// (possibly edited) parameters. Returns the recorded result.
    pub async fn approve(&mut self) -> Result<String, GateError> {
        let (tool, params) = self.gate.approve()?;
        Ok(executor::execute(&tool, &params, &mut self.conversation).await)
    }

    /// Cancel the pending invocation; the capability is never run
    pub fn cancel(&mut self) -> Result<(), GateError> {
        self.gate.cancel()?;
        self.conversation.add_message(Role::Assistant, CANCELLED_REPLY);
        Ok(())
    }

    /// Clear history and silently discard any pending draft
    pub fn clear(&mut self) {
        self.conversation.clear();
        self.gate.reset();
    }
}
