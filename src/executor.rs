//! Tool execution
//!
//! Runs an approved invocation with its final parameters. Capability
//! failures are caught and rendered, never propagated: every execution
//! produces exactly one Assistant record.

use crate::conversation::Conversation;
use crate::registry::{ToolDescriptor, ToolParams};
use crate::types::Role;

/// Invoke the capability and append the result (or rendered failure) to the
/// conversation. Returns the recorded content.
pub async fn execute(
    tool: &ToolDescriptor,
    params: &ToolParams,
    conversation: &mut Conversation,
) -> String {
    tracing::info!(tool = %tool.name(), "Executing approved invocation");

    let content = match tool.invoke(params).await {
        Ok(output) => output,
        Err(err) => {
            tracing::warn!(tool = %tool.name(), error = %err, "Tool execution failed");
            format!("Error: {}", err)
        }
    };

    conversation.add_message(Role::Assistant, content.clone());
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;
    use crate::registry::MockCapability;
    use std::collections::HashMap;
    use std::sync::Arc;

    fn stub_tool(capability: MockCapability) -> ToolDescriptor {
        ToolDescriptor::new("stub", "test double", &["value"], Arc::new(capability))
    }

    #[test]
    fn success_appends_one_assistant_record() {
        let mut capability = MockCapability::new();
        capability
            .expect_invoke()
            .times(1)
            .returning(|_| Ok("42".to_string()));

        let tool = stub_tool(capability);
        let mut conversation = Conversation::new();
        let content =
            tokio_test::block_on(execute(&tool, &HashMap::new(), &mut conversation));

        assert_eq!(content, "42");
        assert_eq!(conversation.len(), 1);
        let record = conversation.last().unwrap();
        assert_eq!(record.role, Role::Assistant);
        assert_eq!(record.content, "42");
    }

    #[test]
    fn failure_is_rendered_not_propagated() {
        let mut capability = MockCapability::new();
        capability
            .expect_invoke()
            .returning(|_| Err(ToolError::new("service unavailable")));

        let tool = stub_tool(capability);
        let mut conversation = Conversation::new();
        let content =
            tokio_test::block_on(execute(&tool, &HashMap::new(), &mut conversation));

        assert_eq!(content, "Error: service unavailable");
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation.last().unwrap().content, "Error: service unavailable");
    }

    #[test]
    fn final_params_reach_the_capability() {
        let mut capability = MockCapability::new();
        capability.expect_invoke().returning(|params| {
            Ok(format!("got {}", params.get("value").cloned().unwrap_or_default()))
        });

        let tool = stub_tool(capability);
        let mut conversation = Conversation::new();
        let mut params = HashMap::new();
        params.insert("value".to_string(), "edited".to_string());

        let content = tokio_test::block_on(execute(&tool, &params, &mut conversation));
        assert_eq!(content, "got edited");
    }
}
