//! Video search tool backed by the YouTube Data API.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{Tool, ToolError};
use crate::youtube::{format_search_results, SearchClient};

/// `get_videos`: fetch video results for a search query.
pub struct VideoSearch {
    client: Arc<SearchClient>,
}

impl VideoSearch {
    pub fn new(client: Arc<SearchClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for VideoSearch {
    fn name(&self) -> &str {
        "get_videos"
    }

    fn description(&self) -> &str {
        "Fetch YouTube video results based on a search query. Returns title, description, channel, publication date, and URL for up to 3 results."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query to find YouTube videos"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: Value) -> Result<String, ToolError> {
        let query = args["query"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("missing 'query' argument".to_string()))?;
        if query.trim().is_empty() {
            return Err(ToolError::InvalidArguments(
                "'query' must be a non-empty string".to_string(),
            ));
        }

        tracing::debug!(query, "searching videos");

        let response = self
            .client
            .search(query)
            .await
            .map_err(|e| ToolError::Execution(e.into()))?;

        Ok(format_search_results(&response))
    }
}
