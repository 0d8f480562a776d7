use std::time::Duration;

use serde_json::Value;

use crate::error::SwarmError;
use crate::tools::Tool;

pub const DEFAULT_INVOKE_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_INVOKE_RETRY_ATTEMPTS: u32 = 1;
pub const DEFAULT_INVOKE_RETRY_DELAY_MS: u64 = 250;

/// Timeout and retry budget applied to each tool invocation.
///
/// The stock policy is a single attempt; the placeholders complete instantly.
/// Hosts swapping in real tool implementations raise the budget per call
/// site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokePolicy {
    pub timeout_secs: u64,
    pub retry_attempts: u32,
    pub retry_delay_ms: u64,
}

impl Default for InvokePolicy {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_INVOKE_TIMEOUT_SECS,
            retry_attempts: DEFAULT_INVOKE_RETRY_ATTEMPTS,
            retry_delay_ms: DEFAULT_INVOKE_RETRY_DELAY_MS,
        }
    }
}

/// Runs one tool invocation under the policy.
///
/// A timed-out attempt is retried after `retry_delay_ms` until the attempt
/// budget is spent, then fails with `ToolTimeout`. Tool-level errors fail
/// fast without retry.
pub async fn invoke_tool(
    tool: &dyn Tool,
    args: Value,
    policy: &InvokePolicy,
) -> Result<Value, SwarmError> {
    let attempt_budget = policy.retry_attempts.max(1);
    let mut attempts = 0u32;

    while attempts < attempt_budget {
        attempts += 1;
        let execution = tool.execute(args.clone());
        match tokio::time::timeout(Duration::from_secs(policy.timeout_secs), execution).await {
            Ok(result) => return result,
            Err(_) => {
                tracing::debug!(
                    tool = tool.name(),
                    attempts,
                    timeout_secs = policy.timeout_secs,
                    "tool invocation timed out"
                );
            }
        }

        if attempts < attempt_budget && policy.retry_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(policy.retry_delay_ms)).await;
        }
    }

    Err(SwarmError::ToolTimeout {
        tool: tool.name().to_string(),
        timeout_secs: policy.timeout_secs,
    })
}
