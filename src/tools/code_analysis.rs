/// Code analysis tool - placeholder static analysis bound to the code agent.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{CODE_ANALYSIS_TOOL_NAME, Tool};
use crate::error::SwarmError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeAnalysis {
    pub line_count: usize,
    pub complexity: Complexity,
    pub suggestions: Vec<String>,
}

/// Placeholder scoring over the raw text. The line count is the number of
/// newline-separated lines (the empty string counts as one). The placeholder
/// always scores `Medium`; a real implementation runs actual static analysis
/// and surfaces `SwarmError::AnalysisError` for code it cannot parse.
pub fn analyze(code: &str) -> CodeAnalysis {
    CodeAnalysis {
        line_count: code.split('\n').count(),
        complexity: Complexity::Medium,
        suggestions: vec![
            "Consider adding error handling".to_string(),
            "Add type hints".to_string(),
        ],
    }
}

pub struct CodeAnalysisTool;

impl CodeAnalysisTool {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for CodeAnalysisTool {
    fn name(&self) -> &str {
        CODE_ANALYSIS_TOOL_NAME
    }

    fn description(&self) -> &str {
        "Analyzes source text and reports line count, a complexity grade, and \
         improvement suggestions. Args: {\"code\": \"<source text>\"}"
    }

    async fn execute(&self, args: Value) -> Result<Value, SwarmError> {
        let code = args.get("code").and_then(Value::as_str).ok_or_else(|| {
            SwarmError::AnalysisError("'code' must be a string".to_string())
        })?;

        let analysis = analyze(code);
        Ok(json!({
            "line_count": analysis.line_count,
            "complexity": analysis.complexity,
            "suggestions": analysis.suggestions,
        }))
    }
}
