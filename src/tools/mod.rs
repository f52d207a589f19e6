//! Tool registry and the `Tool` capability trait.
//!
//! Tools are looked up by name at dispatch time, but their declared
//! parameter schemas are validated when they are registered, so a
//! malformed tool definition fails at startup instead of mid-conversation.

mod videos;

pub use videos::VideoSearch;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::llm::ToolSchema;

/// Error from executing a tool handler.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error(transparent)]
    Execution(#[from] anyhow::Error),
}

/// Error from registering a tool with an invalid definition.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("tool has an empty name")]
    EmptyName,

    #[error("tool '{0}' is already registered")]
    DuplicateName(String),

    #[error("tool '{0}' has an invalid schema: {1}")]
    InvalidSchema(String, String),
}

/// A named capability the model may request.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON schema for the tool's arguments.
    fn parameters_schema(&self) -> Value;

    /// Execute the tool with the supplied arguments, returning text for
    /// the model. Failures propagate; there is no retry at this layer.
    async fn execute(&self, args: Value) -> Result<String, ToolError>;
}

/// Registry mapping tool names to handlers.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, validating its declared schema.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<(), RegistryError> {
        let name = tool.name().to_string();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.tools.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }
        validate_schema(&name, &tool.parameters_schema())?;

        self.tools.insert(name, tool);
        Ok(())
    }

    /// Look up a tool by name. Unknown names are a recoverable condition
    /// handled by the caller, not an error here.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Tool definitions in the shape the chat-completions API expects.
    pub fn schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self
            .tools
            .values()
            .map(|tool| {
                ToolSchema::function(tool.name(), tool.description(), tool.parameters_schema())
            })
            .collect();
        // Stable order for prompts and tests
        schemas.sort_by(|a, b| a.function.name.cmp(&b.function.name));
        schemas
    }

    /// Registered tools, sorted by name.
    pub fn list(&self) -> Vec<&Arc<dyn Tool>> {
        let mut tools: Vec<&Arc<dyn Tool>> = self.tools.values().collect();
        tools.sort_by(|a, b| a.name().cmp(b.name()));
        tools
    }
}

/// Check that a declared schema is a sane JSON-schema object: top-level
/// `type: "object"` and every `required` entry present under `properties`.
fn validate_schema(name: &str, schema: &Value) -> Result<(), RegistryError> {
    let invalid =
        |reason: &str| RegistryError::InvalidSchema(name.to_string(), reason.to_string());

    let object = schema.as_object().ok_or_else(|| invalid("not a JSON object"))?;

    if object.get("type").and_then(Value::as_str) != Some("object") {
        return Err(invalid("top-level type must be \"object\""));
    }

    let properties = object
        .get("properties")
        .and_then(Value::as_object)
        .ok_or_else(|| invalid("missing properties object"))?;

    if let Some(required) = object.get("required") {
        let required = required
            .as_array()
            .ok_or_else(|| invalid("required must be an array"))?;
        for entry in required {
            let field = entry
                .as_str()
                .ok_or_else(|| invalid("required entries must be strings"))?;
            if !properties.contains_key(field) {
                return Err(invalid(&format!(
                    "required field '{}' missing from properties",
                    field
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FakeTool {
        name: &'static str,
        schema: Value,
    }

    #[async_trait]
    impl Tool for FakeTool {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "a fake tool"
        }

        fn parameters_schema(&self) -> Value {
            self.schema.clone()
        }

        async fn execute(&self, _args: Value) -> Result<String, ToolError> {
            Ok("ok".to_string())
        }
    }

    fn valid_schema() -> Value {
        json!({
            "type": "object",
            "properties": {"query": {"type": "string"}},
            "required": ["query"]
        })
    }

    #[test]
    fn register_accepts_valid_schema() {
        let mut registry = ToolRegistry::new();
        registry
            .register(Arc::new(FakeTool {
                name: "fake",
                schema: valid_schema(),
            }))
            .unwrap();
        assert!(registry.get("fake").is_some());
    }

    #[test]
    fn register_rejects_non_object_schema() {
        let mut registry = ToolRegistry::new();
        let err = registry
            .register(Arc::new(FakeTool {
                name: "fake",
                schema: json!("string"),
            }))
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidSchema(_, _)));
    }

    #[test]
    fn register_rejects_required_field_without_property() {
        let mut registry = ToolRegistry::new();
        let err = registry
            .register(Arc::new(FakeTool {
                name: "fake",
                schema: json!({
                    "type": "object",
                    "properties": {},
                    "required": ["query"]
                }),
            }))
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidSchema(_, _)));
    }

    #[test]
    fn register_rejects_duplicate_name() {
        let mut registry = ToolRegistry::new();
        registry
            .register(Arc::new(FakeTool {
                name: "fake",
                schema: valid_schema(),
            }))
            .unwrap();
        let err = registry
            .register(Arc::new(FakeTool {
                name: "fake",
                schema: valid_schema(),
            }))
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName(name) if name == "fake"));
    }

    #[test]
    fn unknown_name_lookup_returns_none() {
        let registry = ToolRegistry::new();
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn schemas_are_sorted_by_name() {
        let mut registry = ToolRegistry::new();
        registry
            .register(Arc::new(FakeTool {
                name: "zeta",
                schema: valid_schema(),
            }))
            .unwrap();
        registry
            .register(Arc::new(FakeTool {
                name: "alpha",
                schema: valid_schema(),
            }))
            .unwrap();
        let names: Vec<String> = registry
            .schemas()
            .into_iter()
            .map(|s| s.function.name)
            .collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}
