use serde_json::{Value, json};

use crate::config::SwarmFileConfig;
use crate::error::SwarmError;
use crate::invoke::{self, InvokePolicy};
use crate::registry::{AgentDescriptor, AgentRegistry};
use crate::router::{RouteRule, TaskRouter};
use crate::telemetry::TelemetrySink;
use crate::tools::{build_builtin_tools, known_tool_names, resolve_tools};
use crate::transfer::TransferResolver;

/// Assembles and validates a swarm before publication.
///
/// `build` is the single point where the registry invariants are enforced:
/// unique identifiers, no dangling route targets, and an existing default
/// agent. Until then the builder is freely extendable.
#[derive(Debug, Default)]
pub struct SwarmBuilder {
    agents: Vec<AgentDescriptor>,
    rules: Vec<RouteRule>,
    default_agent: Option<String>,
    telemetry: Option<TelemetrySink>,
    invoke_policy: InvokePolicy,
}

impl SwarmBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn agent(mut self, descriptor: AgentDescriptor) -> Self {
        self.agents.push(descriptor);
        self
    }

    pub fn rule(mut self, keyword: impl Into<String>, agent: impl Into<String>) -> Self {
        self.rules.push(RouteRule::new(keyword, agent));
        self
    }

    pub fn rules(mut self, rules: impl IntoIterator<Item = RouteRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn default_agent(mut self, id: impl Into<String>) -> Self {
        self.default_agent = Some(id.into());
        self
    }

    pub fn telemetry(mut self, sink: TelemetrySink) -> Self {
        self.telemetry = Some(sink);
        self
    }

    pub fn invoke_policy(mut self, policy: InvokePolicy) -> Self {
        self.invoke_policy = policy;
        self
    }

    /// Folds catalog-file overrides into the builder.
    ///
    /// Agent overrides replace descriptors wholesale and keep their
    /// registration position; new agents append in name order. A non-empty
    /// route list replaces the current table; a file default agent replaces
    /// the current fallback. Tool names resolve against the built-in tool
    /// set. Invariants are still checked by `build`, not here.
    pub fn apply_file(mut self, file: &SwarmFileConfig) -> Result<Self, SwarmError> {
        let available = build_builtin_tools();

        for (id, agent) in &file.agents {
            let descriptor = AgentDescriptor::new(
                id.clone(),
                agent.display_name.clone().unwrap_or_else(|| id.clone()),
                agent.instructions.clone().unwrap_or_default(),
            )
            .with_tools(resolve_tools(&agent.tools, &available)?);

            match self
                .agents
                .iter()
                .position(|existing| existing.id == *id)
            {
                Some(position) => self.agents[position] = descriptor,
                None => self.agents.push(descriptor),
            }
        }

        if !file.routes.is_empty() {
            self.rules = file
                .routes
                .iter()
                .map(|route| RouteRule::new(route.keyword.clone(), route.agent.clone()))
                .collect();
        }

        if let Some(default_agent) = &file.default_agent {
            self.default_agent = Some(default_agent.clone());
        }

        Ok(self)
    }

    /// Validates the assembled swarm and publishes it as an immutable
    /// `SwarmConfig`.
    pub fn build(self) -> Result<SwarmConfig, SwarmError> {
        let registry = AgentRegistry::new(self.agents)?;

        let default_agent = self.default_agent.ok_or(SwarmError::MissingDefaultAgent)?;
        if !registry.contains(&default_agent) {
            return Err(SwarmError::UnknownAgent {
                id: default_agent,
                available: registry.available(),
            });
        }

        for rule in &self.rules {
            if !registry.contains(&rule.agent) {
                return Err(SwarmError::DanglingRoute {
                    keyword: rule.keyword.clone(),
                    agent: rule.agent.clone(),
                });
            }
        }

        let router = TaskRouter::new(self.rules, default_agent);
        let telemetry = self.telemetry.unwrap_or_else(TelemetrySink::disabled);

        tracing::info!(
            agents = registry.len(),
            rules = router.rules().len(),
            default_agent = router.default_agent(),
            "swarm configuration published"
        );
        telemetry.emit(
            "swarm.published",
            json!({
                "agents": registry.len(),
                "rules": router.rules().len(),
                "default_agent": router.default_agent(),
            }),
        );

        Ok(SwarmConfig {
            registry,
            router,
            telemetry,
            invoke_policy: self.invoke_policy,
        })
    }
}

/// Immutable swarm configuration: registry, router, telemetry sink, and
/// invocation policy, published together by `SwarmBuilder::build`.
///
/// There is no mutable state behind it, so a `SwarmConfig` can be shared
/// across threads freely; routing and resolution never lock.
#[derive(Debug, Clone)]
pub struct SwarmConfig {
    registry: AgentRegistry,
    router: TaskRouter,
    telemetry: TelemetrySink,
    invoke_policy: InvokePolicy,
}

impl SwarmConfig {
    /// Stock configuration: built-in agents, default route table, disabled
    /// telemetry, stock invocation policy.
    pub fn builtin() -> Result<Self, SwarmError> {
        crate::catalog::builtin_swarm().build()
    }

    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    pub fn router(&self) -> &TaskRouter {
        &self.router
    }

    pub fn resolver(&self) -> TransferResolver<'_> {
        TransferResolver::new(&self.registry, &self.telemetry)
    }

    pub fn telemetry(&self) -> &TelemetrySink {
        &self.telemetry
    }

    pub fn invoke_policy(&self) -> &InvokePolicy {
        &self.invoke_policy
    }

    /// Routes free text to an agent and resolves the hand-off: the full
    /// caller-text to descriptor control flow.
    pub fn dispatch(&self, task: &str) -> Result<&AgentDescriptor, SwarmError> {
        let decision = self.router.decide(task);
        match decision.matched_keyword {
            Some(keyword) => {
                tracing::debug!(agent = decision.agent, keyword, "task routed by keyword");
                self.telemetry.emit(
                    "route.matched",
                    json!({ "agent": decision.agent, "keyword": keyword }),
                );
            }
            None => {
                tracing::debug!(agent = decision.agent, "task routed to fallback");
                self.telemetry
                    .emit("route.fallback", json!({ "agent": decision.agent }));
            }
        }

        self.resolver().resolve(decision.agent)
    }

    /// Executes a named tool attached to an agent under the invocation
    /// policy, recording the outcome.
    pub async fn invoke_tool(
        &self,
        agent_id: &str,
        tool_name: &str,
        args: Value,
    ) -> Result<Value, SwarmError> {
        let agent = self.registry.get(agent_id)?;
        let tool = agent.tool(tool_name).ok_or_else(|| SwarmError::UnknownTool {
            name: tool_name.to_string(),
            available: known_tool_names(&agent.tools),
        })?;

        match invoke::invoke_tool(tool.as_ref(), args, &self.invoke_policy).await {
            Ok(output) => {
                self.telemetry.emit(
                    "tool.invoked",
                    json!({ "agent": agent_id, "tool": tool_name }),
                );
                Ok(output)
            }
            Err(err) => {
                match &err {
                    SwarmError::ToolTimeout { timeout_secs, .. } => self.telemetry.emit(
                        "tool.timeout",
                        json!({
                            "agent": agent_id,
                            "tool": tool_name,
                            "timeout_secs": timeout_secs,
                        }),
                    ),
                    _ => self.telemetry.emit(
                        "tool.failed",
                        json!({
                            "agent": agent_id,
                            "tool": tool_name,
                            "error": err.to_string(),
                        }),
                    ),
                }
                Err(err)
            }
        }
    }
}
