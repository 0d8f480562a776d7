pub mod code_analysis;
pub mod data_processing;
pub mod web_search;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::SwarmError;

pub const WEB_SEARCH_TOOL_NAME: &str = "web_search";
pub const CODE_ANALYSIS_TOOL_NAME: &str = "code_analysis";
pub const DATA_PROCESSING_TOOL_NAME: &str = "data_processing";

/// Callable capability an agent may invoke to accomplish a subtask.
///
/// Implementations parse their JSON arguments, do the work, and return a JSON
/// payload. They have no side effects on the registry or router; descriptors
/// share tools behind `Arc`, so implementations stay stateless.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    async fn execute(&self, args: Value) -> Result<Value, SwarmError>;
}

pub fn build_builtin_tools() -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(web_search::WebSearchTool::new()),
        Arc::new(code_analysis::CodeAnalysisTool::new()),
        Arc::new(data_processing::DataProcessingTool::new()),
    ]
}

/// Maps configured tool names onto instances from `available`, preserving the
/// configured order.
pub fn resolve_tools(
    names: &[String],
    available: &[Arc<dyn Tool>],
) -> Result<Vec<Arc<dyn Tool>>, SwarmError> {
    let mut resolved = Vec::with_capacity(names.len());
    for name in names {
        let tool = available
            .iter()
            .find(|tool| tool.name() == name)
            .cloned()
            .ok_or_else(|| SwarmError::UnknownTool {
                name: name.clone(),
                available: known_tool_names(available),
            })?;
        resolved.push(tool);
    }
    Ok(resolved)
}

pub(crate) fn known_tool_names(available: &[Arc<dyn Tool>]) -> String {
    if available.is_empty() {
        return "(none)".to_string();
    }
    let mut names = available
        .iter()
        .map(|tool| tool.name().to_string())
        .collect::<Vec<_>>();
    names.sort_unstable();
    names.join(", ")
}
