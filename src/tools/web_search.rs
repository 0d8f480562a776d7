/// Web search tool - placeholder lookup bound to the research agent.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{Tool, WEB_SEARCH_TOOL_NAME};
use crate::error::SwarmError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub query: String,
    pub results: String,
}

/// Placeholder search. A real implementation calls an external search
/// provider and surfaces `SwarmError::SearchUnavailable` on provider failure.
pub fn search(query: &str) -> SearchResult {
    SearchResult {
        query: query.to_string(),
        results: format!("Search results for: {query}"),
    }
}

pub struct WebSearchTool;

impl WebSearchTool {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for WebSearchTool {
    fn name(&self) -> &str {
        WEB_SEARCH_TOOL_NAME
    }

    fn description(&self) -> &str {
        "Searches the web for the given query and returns a result digest. \
         Args: {\"query\": \"<search text>\"}"
    }

    async fn execute(&self, args: Value) -> Result<Value, SwarmError> {
        let query = args.get("query").and_then(Value::as_str).ok_or_else(|| {
            SwarmError::InvalidToolArgs {
                tool: WEB_SEARCH_TOOL_NAME.to_string(),
                reason: "'query' must be a string".to_string(),
            }
        })?;

        let result = search(query);
        Ok(json!({
            "query": result.query,
            "results": result.results,
        }))
    }
}
