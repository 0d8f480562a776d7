/// Built-in catalog - the stock agents, tool bindings, and route table.
use std::sync::Arc;

use crate::registry::AgentDescriptor;
use crate::router::RouteRule;
use crate::swarm::SwarmBuilder;
use crate::tools::code_analysis::CodeAnalysisTool;
use crate::tools::data_processing::DataProcessingTool;
use crate::tools::web_search::WebSearchTool;

pub const COORDINATOR_AGENT: &str = "coordinator";
pub const RESEARCH_AGENT: &str = "research";
pub const CODE_AGENT: &str = "code";
pub const DATA_AGENT: &str = "data";
pub const QA_AGENT: &str = "qa";

/// The stock route table in priority order. Earlier rules win ties, so
/// "testing" and "quality" outrank "coordinate" by position.
pub fn default_route_rules() -> Vec<RouteRule> {
    vec![
        RouteRule::new("research", RESEARCH_AGENT),
        RouteRule::new("code", CODE_AGENT),
        RouteRule::new("data", DATA_AGENT),
        RouteRule::new("testing", QA_AGENT),
        RouteRule::new("quality", QA_AGENT),
        RouteRule::new("coordinate", COORDINATOR_AGENT),
    ]
}

/// Builder pre-loaded with the five stock agents, the default route table,
/// and the coordinator as router fallback. Callers may extend or override
/// before `build()`.
pub fn builtin_swarm() -> SwarmBuilder {
    SwarmBuilder::new()
        .agent(AgentDescriptor::new(
            COORDINATOR_AGENT,
            "Coordinator",
            COORDINATOR_INSTRUCTIONS,
        ))
        .agent(
            AgentDescriptor::new(RESEARCH_AGENT, "Research Agent", RESEARCH_INSTRUCTIONS)
                .with_tool(Arc::new(WebSearchTool::new())),
        )
        .agent(
            AgentDescriptor::new(CODE_AGENT, "Code Agent", CODE_INSTRUCTIONS)
                .with_tool(Arc::new(CodeAnalysisTool::new())),
        )
        .agent(
            AgentDescriptor::new(DATA_AGENT, "Data Agent", DATA_INSTRUCTIONS)
                .with_tool(Arc::new(DataProcessingTool::new())),
        )
        .agent(AgentDescriptor::new(QA_AGENT, "QA Agent", QA_INSTRUCTIONS))
        .rules(default_route_rules())
        .default_agent(COORDINATOR_AGENT)
}

const COORDINATOR_INSTRUCTIONS: &str = "\
You are the main coordinator agent. Your responsibilities include:
1. Understanding user requests and breaking them down into subtasks
2. Delegating tasks to appropriate specialized agents
3. Aggregating results from multiple agents
4. Providing comprehensive responses to users

You coordinate between:
- Research Agent: For gathering information
- Code Agent: For writing and reviewing code
- Data Agent: For data processing and analysis
- QA Agent: For testing and quality assurance

Always provide clear, structured responses.";

const RESEARCH_INSTRUCTIONS: &str = "\
You are a research specialist. Your responsibilities include:
1. Gathering information from various sources
2. Fact-checking and verifying information
3. Summarizing findings in a clear, concise manner
4. Providing citations and references when applicable

Focus on accuracy and relevance in your research.";

const CODE_INSTRUCTIONS: &str = "\
You are a code specialist. Your responsibilities include:
1. Writing clean, efficient, and well-documented code
2. Reviewing code for best practices and potential issues
3. Suggesting optimizations and improvements
4. Explaining complex code concepts clearly

Follow the project's coding standards and conventions.";

const DATA_INSTRUCTIONS: &str = "\
You are a data specialist. Your responsibilities include:
1. Processing and analyzing data efficiently
2. Creating data visualizations and reports
3. Identifying patterns and insights
4. Ensuring data quality and integrity

Focus on accuracy and meaningful insights.";

const QA_INSTRUCTIONS: &str = "\
You are a quality assurance specialist. Your responsibilities include:
1. Testing functionality and edge cases
2. Identifying bugs and potential issues
3. Verifying requirements are met
4. Suggesting improvements for reliability

Be thorough and systematic in your testing approach.";
