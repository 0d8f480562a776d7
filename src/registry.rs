use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::SwarmError;
use crate::tools::Tool;

/// Named role with fixed instructions and an attached tool set, executed by
/// the external orchestration runtime.
///
/// A descriptor is assembled in one step, tools included, before the registry
/// is published. Nothing mutates it afterwards; the registry only hands out
/// shared references.
#[derive(Clone)]
pub struct AgentDescriptor {
    pub id: String,
    pub display_name: String,
    pub instructions: String,
    pub tools: Vec<Arc<dyn Tool>>,
}

impl AgentDescriptor {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            instructions: instructions.into(),
            tools: Vec::new(),
        }
    }

    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn with_tools(mut self, tools: impl IntoIterator<Item = Arc<dyn Tool>>) -> Self {
        self.tools.extend(tools);
        self
    }

    /// Finds an attached tool by name.
    pub fn tool(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|tool| tool.name() == name)
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }
}

impl fmt::Debug for AgentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentDescriptor")
            .field("id", &self.id)
            .field("display_name", &self.display_name)
            .field("tools", &self.tool_names())
            .finish_non_exhaustive()
    }
}

/// Immutable mapping from stable agent identifier to descriptor.
///
/// Built once by `SwarmBuilder::build` and read-only afterwards, so it can be
/// shared across threads without locking. Iteration follows registration
/// order.
#[derive(Debug, Clone)]
pub struct AgentRegistry {
    agents: Vec<AgentDescriptor>,
    index: HashMap<String, usize>,
}

impl AgentRegistry {
    pub(crate) fn new(agents: Vec<AgentDescriptor>) -> Result<Self, SwarmError> {
        let mut index = HashMap::with_capacity(agents.len());
        for (position, agent) in agents.iter().enumerate() {
            if index.insert(agent.id.clone(), position).is_some() {
                return Err(SwarmError::DuplicateAgent(agent.id.clone()));
            }
        }
        Ok(Self { agents, index })
    }

    /// Resolves a descriptor by exact identifier match.
    pub fn get(&self, id: &str) -> Result<&AgentDescriptor, SwarmError> {
        self.index
            .get(id)
            .map(|position| &self.agents[*position])
            .ok_or_else(|| SwarmError::UnknownAgent {
                id: id.to_string(),
                available: self.available(),
            })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Registered identifiers in registration order.
    pub fn list(&self) -> impl Iterator<Item = &str> {
        self.agents.iter().map(|agent| agent.id.as_str())
    }

    pub fn agents(&self) -> &[AgentDescriptor] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub(crate) fn available(&self) -> String {
        let mut names = self.list().collect::<Vec<_>>();
        names.sort_unstable();
        names.join(", ")
    }
}
