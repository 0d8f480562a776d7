use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Host-supplied catalog overrides, loaded once at startup and folded into a
/// `SwarmBuilder` via `apply_file`.
///
/// Agent entries add new agents or replace built-ins wholesale. A non-empty
/// route list replaces the default table in file order. Agents live in a
/// `BTreeMap` because TOML tables carry no order; name order keeps the
/// registration sequence of new agents deterministic.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwarmFileConfig {
    pub default_agent: Option<String>,
    #[serde(default)]
    pub agents: BTreeMap<String, AgentFileConfig>,
    #[serde(default)]
    pub routes: Vec<RouteFileEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentFileConfig {
    pub display_name: Option<String>,
    pub instructions: Option<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteFileEntry {
    pub keyword: String,
    pub agent: String,
}

impl SwarmFileConfig {
    /// Loads catalog overrides from `path`. A missing file is an empty
    /// override set.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read swarm catalog file at '{}'", path.display()))?;
        toml::from_str::<Self>(&content).with_context(|| {
            format!(
                "invalid swarm catalog configuration in '{}'. Check field names and route entries.",
                path.display()
            )
        })
    }
}
