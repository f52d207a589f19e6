//! Core agent loop implementation.

use std::sync::Arc;

use serde_json::Value;

use crate::config::Config;
use crate::llm::{ChatMessage, LlmClient, OpenAiClient};
use crate::tools::{ToolRegistry, VideoSearch};
use crate::youtube::SearchClient;

use super::prompt::build_system_prompt;

/// Diagnostic returned to the model when it requests an unknown tool.
/// A soft failure: the loop continues and the model is expected to retry.
const BAD_TOOL_NAME: &str = "bad tool name, retry";

/// The conversational agent.
pub struct Agent {
    config: Config,
    llm: Arc<dyn LlmClient>,
    tools: ToolRegistry,
}

impl Agent {
    /// Create a new agent with the given configuration.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let llm = Arc::new(OpenAiClient::new(
            config.openai_api_key.clone(),
            config.openai_base_url.clone(),
        ));

        let search = Arc::new(SearchClient::new(config.youtube_api_key.clone()));
        let mut tools = ToolRegistry::new();
        tools.register(Arc::new(VideoSearch::new(search)))?;

        Ok(Self { config, llm, tools })
    }

    /// Create an agent from explicit parts (useful for testing).
    pub fn with_parts(config: Config, llm: Arc<dyn LlmClient>, tools: ToolRegistry) -> Self {
        Self { config, llm, tools }
    }

    /// Run one user turn to completion and return the final reply.
    ///
    /// `history` is the caller-owned transcript seed; this method never
    /// stores conversation state of its own. The system prompt is
    /// prepended exactly once, before the loop starts.
    pub async fn run_turn(
        &self,
        history: &[ChatMessage],
        user_message: &str,
    ) -> anyhow::Result<String> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatMessage::system(build_system_prompt(&self.tools)));
        messages.extend_from_slice(history);
        messages.push(ChatMessage::user(user_message));

        let tool_schemas = self.tools.schemas();

        for iteration in 0..self.config.max_iterations {
            tracing::debug!("Agent iteration {}", iteration + 1);

            // Generate: ask the model
            let response = self
                .llm
                .chat_completion(&self.config.default_model, &messages, Some(&tool_schemas))
                .await?;

            // Act: resolve pending tool calls in request order
            if response.has_tool_calls() {
                let tool_calls = response.tool_calls.clone().unwrap_or_default();
                messages.push(response);

                for tool_call in &tool_calls {
                    let result = match self.tools.get(&tool_call.function.name) {
                        Some(tool) => {
                            tracing::info!(
                                tool = %tool_call.function.name,
                                args = %tool_call.function.arguments,
                                "calling tool"
                            );
                            let args: Value =
                                serde_json::from_str(&tool_call.function.arguments)
                                    .unwrap_or(Value::Null);
                            // Handler failures abort the turn; no retry
                            // policy exists at this layer.
                            tool.execute(args).await?
                        }
                        None => {
                            tracing::warn!(
                                tool = %tool_call.function.name,
                                "model requested unknown tool"
                            );
                            BAD_TOOL_NAME.to_string()
                        }
                    };

                    messages.push(ChatMessage::tool_result(
                        tool_call.id.clone(),
                        tool_call.function.name.clone(),
                        result,
                    ));
                }

                continue;
            }

            // No tool calls - this is the final response
            if let Some(content) = response.content {
                return Ok(content);
            }

            // Empty response - shouldn't happen but handle gracefully
            return Err(anyhow::anyhow!("LLM returned empty response"));
        }

        Err(anyhow::anyhow!(
            "Max iterations ({}) reached without completion",
            self.config.max_iterations
        ))
    }
}
