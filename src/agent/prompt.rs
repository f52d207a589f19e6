//! System prompt templates for the agent.

use crate::tools::ToolRegistry;

/// Build the system prompt with tool definitions.
pub fn build_system_prompt(tools: &ToolRegistry) -> String {
    let tool_descriptions = tools
        .list()
        .iter()
        .map(|t| format!("- **{}**: {}", t.name(), t.description()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are a smart research assistant. Use the video search to look up information.

## Your Capabilities

You have access to the following tools:
{tool_descriptions}

## Rules and Guidelines

1. **Only look up information when you are sure of what you want.** You are allowed to make multiple calls, together or in sequence, and you may look something up before asking a follow-up question.

2. **Stay helpful** - Answer the user's question directly; cite video titles and URLs when you used search results.

3. **Mathematics** - Use LaTeX format for maths and wrap each LaTeX expression in '$$' delimiters, for example:
$$ \boxed{{\left( x, y \right) = \left( \frac{{1}}{{5}}, -\frac{{3}}{{5}} \right)}} $$

If you need to use a tool, respond with a tool call. The system will execute it and return the result."#,
        tool_descriptions = tool_descriptions
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::tools::{Tool, ToolError};

    struct ClipFinder;

    #[async_trait]
    impl Tool for ClipFinder {
        fn name(&self) -> &str {
            "find_clips"
        }

        fn description(&self) -> &str {
            "Locate short clips for a topic."
        }

        fn parameters_schema(&self) -> Value {
            json!({
                "type": "object",
                "properties": {"query": {"type": "string"}},
                "required": ["query"]
            })
        }

        async fn execute(&self, _args: Value) -> Result<String, ToolError> {
            Ok(String::new())
        }
    }

    #[test]
    fn prompt_lists_no_tools_for_empty_registry() {
        let prompt = build_system_prompt(&ToolRegistry::new());
        assert!(prompt.contains("research assistant"));
        assert!(prompt.contains("$$"));
    }

    #[test]
    fn prompt_renders_registered_tool_inventory() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(ClipFinder)).unwrap();

        let prompt = build_system_prompt(&registry);
        assert!(prompt.contains("- **find_clips**: Locate short clips for a topic."));
    }
}
