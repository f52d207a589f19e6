//! Agent module - the core conversational agent logic.
//!
//! The agent follows a "tools in a loop" pattern:
//! 1. Build context with system prompt, session history, and the new user message
//! 2. Call LLM with available tools
//! 3. If LLM requests tool calls, execute them and feed results back
//! 4. Repeat until LLM produces final prose or the iteration cap is hit

mod agent_loop;
mod prompt;

pub use agent_loop::Agent;
pub use prompt::build_system_prompt;
