//! Human approval gate
//!
//! Single-slot state machine holding at most one pending tool invocation per
//! conversation. A staged invocation suspends further input until a human
//! approves, edits, or cancels it; the capability never runs before approval.

use crate::error::GateError;
use crate::registry::{ToolDescriptor, ToolParams};

/// An unexecuted, parameter-filled reference to one tool, awaiting approval
#[derive(Debug, Clone)]
pub struct InvocationDraft {
    /// The tool to invoke
    pub tool: ToolDescriptor,
    /// Parameters as extracted by the classifier
    pub params: ToolParams,
    /// Parameters as shown to (and edited by) the human; these are the ones
    /// that execute
    pub display_params: ToolParams,
}

impl InvocationDraft {
    /// Create a draft; the editable copy starts identical to the extraction
    pub fn new(tool: ToolDescriptor, params: ToolParams) -> Self {
        let display_params = params.clone();
        Self {
            tool,
            params,
            display_params,
        }
    }
}

/// Per-conversation approval slot
#[derive(Debug, Clone, Default)]
pub enum ApprovalState {
    #[default]
    Idle,
    Pending(InvocationDraft),
}

/// The approval state machine
#[derive(Debug, Default)]
pub struct ApprovalGate {
    state: ApprovalState,
}

impl ApprovalGate {
    pub fn new() -> Self {
        Self {
            state: ApprovalState::Idle,
        }
    }

    pub fn state(&self) -> &ApprovalState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, ApprovalState::Pending(_))
    }

    /// The draft currently awaiting approval, if any
    pub fn pending(&self) -> Option<&InvocationDraft> {
        match &self.state {
            ApprovalState::Idle => None,
            ApprovalState::Pending(draft) => Some(draft),
        }
    }

    /// Hold a draft for approval. Valid only from `Idle`.
    pub fn stage(&mut self, draft: InvocationDraft) -> Result<(), GateError> {
        if self.is_pending() {
            return Err(GateError::AlreadyPending);
        }
        tracing::info!(tool = %draft.tool.name(), "Invocation staged for approval");
        self.state = ApprovalState::Pending(draft);
        Ok(())
    }

    /// Rewrite one displayed parameter of the pending draft.
    ///
    /// Only fields the draft actually carries may be edited; the state does
    /// not change.
    pub fn edit(&mut self, field: &str, value: impl Into<String>) -> Result<(), GateError> {
        match &mut self.state {
            ApprovalState::Idle => Err(GateError::NothingPending),
            ApprovalState::Pending(draft) => {
                if !draft.display_params.contains_key(field) {
                    return Err(GateError::UnknownField(field.to_string()));
                }
                draft.display_params.insert(field.to_string(), value.into());
                Ok(())
            }
        }
    }

    /// Approve the pending draft, returning the tool and the final (possibly
    /// edited) parameters for the executor. The gate returns to `Idle`
    /// regardless of what execution later does.
    pub fn approve(&mut self) -> Result<(ToolDescriptor, ToolParams), GateError> {
        match std::mem::take(&mut self.state) {
            ApprovalState::Idle => Err(GateError::NothingPending),
            ApprovalState::Pending(draft) => {
                tracing::info!(tool = %draft.tool.name(), "Invocation approved");
                Ok((draft.tool, draft.display_params))
            }
        }
    }

    /// Cancel the pending draft without invoking anything, returning the
    /// discarded draft so the caller can record the cancellation.
    pub fn cancel(&mut self) -> Result<InvocationDraft, GateError> {
        match std::mem::take(&mut self.state) {
            ApprovalState::Idle => Err(GateError::NothingPending),
            ApprovalState::Pending(draft) => {
                tracing::info!(tool = %draft.tool.name(), "Invocation cancelled");
                Ok(draft)
            }
        }
    }

    /// Force `Idle` from any state, discarding a pending draft silently.
    /// Used by history-clear.
    pub fn reset(&mut self) {
        self.state = ApprovalState::Idle;
    }
}
