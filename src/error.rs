use thiserror::Error;

/// Failures surfaced by the swarm configuration layer.
///
/// Lookup and build failures fail fast and reach the caller typed; nothing is
/// recovered internally and nothing falls back silently. The router is total
/// and never produces one of these.
#[derive(Debug, Error)]
pub enum SwarmError {
    /// Requested identifier is not in the registry. Also raised at build time
    /// when the configured default agent does not exist.
    #[error("agent '{id}' not found. Available agents: {available}")]
    UnknownAgent { id: String, available: String },

    /// Two descriptors share an identifier at build time.
    #[error("duplicate agent identifier '{0}'")]
    DuplicateAgent(String),

    /// A route rule targets an identifier with no descriptor behind it.
    #[error("route keyword '{keyword}' targets unknown agent '{agent}'")]
    DanglingRoute { keyword: String, agent: String },

    /// The builder was published without a router fallback.
    #[error("no default agent configured for the router fallback")]
    MissingDefaultAgent,

    /// A configured or requested tool name matches no known tool.
    #[error("tool '{name}' not found. Available tools: {available}")]
    UnknownTool { name: String, available: String },

    /// Tool argument payload did not match the tool's contract.
    #[error("invalid arguments for tool '{tool}': {reason}")]
    InvalidToolArgs { tool: String, reason: String },

    /// Search provider failure. The placeholder search never raises this; a
    /// real provider integration surfaces its transport errors here.
    #[error("search provider unavailable: {0}")]
    SearchUnavailable(String),

    /// Code analysis received input it cannot parse.
    #[error("code analysis failed: {0}")]
    AnalysisError(String),

    /// Data processing received a malformed payload.
    #[error("data processing failed: {0}")]
    ProcessingError(String),

    /// The invocation policy spent its attempt budget on timeouts.
    #[error("tool '{tool}' timed out after {timeout_secs}s")]
    ToolTimeout { tool: String, timeout_secs: u64 },
}
