/// Data processing tool - placeholder aggregation bound to the data agent.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{DATA_PROCESSING_TOOL_NAME, Tool};
use crate::error::SwarmError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSummary {
    pub count: usize,
    pub summary: String,
    pub insights: Vec<String>,
}

/// Placeholder aggregation over an item list. A real implementation performs
/// actual analysis and surfaces `SwarmError::ProcessingError` for payloads it
/// cannot process.
pub fn process(items: &[Value]) -> DataSummary {
    DataSummary {
        count: items.len(),
        summary: "Data processed successfully".to_string(),
        insights: vec![
            "Pattern identified".to_string(),
            "Anomaly detected".to_string(),
        ],
    }
}

pub struct DataProcessingTool;

impl DataProcessingTool {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for DataProcessingTool {
    fn name(&self) -> &str {
        DATA_PROCESSING_TOOL_NAME
    }

    fn description(&self) -> &str {
        "Aggregates a list of data items and reports a summary with insights. \
         Args: {\"items\": [<any JSON values>]}"
    }

    async fn execute(&self, args: Value) -> Result<Value, SwarmError> {
        let items = args.get("items").and_then(Value::as_array).ok_or_else(|| {
            SwarmError::ProcessingError("'items' must be an array".to_string())
        })?;

        let summary = process(items);
        Ok(json!({
            "count": summary.count,
            "summary": summary.summary,
            "insights": summary.insights,
        }))
    }
}
