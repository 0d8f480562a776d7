/// One keyword rule. The route table is an ordered list of these; position
/// determines match priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    pub keyword: String,
    pub agent: String,
}

impl RouteRule {
    pub fn new(keyword: impl Into<String>, agent: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            agent: agent.into(),
        }
    }
}

/// Outcome of a routing decision: the selected agent and the keyword that
/// matched, when one did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDecision<'a> {
    pub agent: &'a str,
    pub matched_keyword: Option<&'a str>,
}

/// Maps free-text task descriptions to agent identifiers.
///
/// The scan is case-insensitive and substring-based ("codebase" matches the
/// keyword "code"). The first rule in declaration order whose keyword occurs
/// anywhere in the task wins, even when a later keyword would be a longer
/// match. When nothing matches, the configured default applies. Total: never
/// fails, never blocks.
#[derive(Debug, Clone)]
pub struct TaskRouter {
    rules: Vec<RouteRule>,
    default_agent: String,
}

impl TaskRouter {
    pub(crate) fn new(rules: Vec<RouteRule>, default_agent: String) -> Self {
        // Keywords are compared against lowercased task text, so they must be
        // lowercase themselves to ever match.
        let rules = rules
            .into_iter()
            .map(|rule| RouteRule {
                keyword: rule.keyword.to_lowercase(),
                agent: rule.agent,
            })
            .collect();
        Self {
            rules,
            default_agent,
        }
    }

    pub fn route(&self, task: &str) -> &str {
        self.decide(task).agent
    }

    pub fn decide(&self, task: &str) -> RouteDecision<'_> {
        let lower = task.to_lowercase();
        for rule in &self.rules {
            if lower.contains(&rule.keyword) {
                return RouteDecision {
                    agent: &rule.agent,
                    matched_keyword: Some(&rule.keyword),
                };
            }
        }
        RouteDecision {
            agent: &self.default_agent,
            matched_keyword: None,
        }
    }

    /// The rule table in priority order.
    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    pub fn default_agent(&self) -> &str {
        &self.default_agent
    }
}
