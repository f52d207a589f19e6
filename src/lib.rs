//! # vidscout
//!
//! A chat assistant that answers questions and researches YouTube videos.
//!
//! This library provides:
//! - An HTTP chat surface with a browser front-end
//! - A tool-based agent loop for model-driven video search
//! - Integration with any OpenAI-compatible chat-completions API
//!
//! ## Architecture
//!
//! The agent follows the "tools in a loop" pattern:
//! 1. Receive a user message via the chat API
//! 2. Build context with system prompt, session history, and tool schemas
//! 3. Call LLM, parse response, execute any tool calls
//! 4. Feed results back to LLM, repeat until the model produces final prose
//!
//! ## Example
//!
//! ```rust,ignore
//! use vidscout::{agent::Agent, config::Config};
//!
//! let config = Config::from_env()?;
//! let agent = Agent::new(config)?;
//! let reply = agent.run_turn(&[], "find a Rust tutorial").await?;
//! ```

pub mod agent;
pub mod api;
pub mod config;
pub mod llm;
pub mod tools;
pub mod youtube;

pub use config::Config;
