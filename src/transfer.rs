use serde_json::json;

use crate::error::SwarmError;
use crate::registry::{AgentDescriptor, AgentRegistry};
use crate::telemetry::TelemetrySink;

/// Hand-off seam between agents.
///
/// Lookup behavior is identical to `AgentRegistry::get`; on top of it, every
/// call records the transition - a `tracing` event plus a `handoff.resolved`
/// or `handoff.rejected` telemetry record - so the router's contract stays
/// untouched when hand-off side effects grow.
#[derive(Debug, Clone, Copy)]
pub struct TransferResolver<'a> {
    registry: &'a AgentRegistry,
    telemetry: &'a TelemetrySink,
}

impl<'a> TransferResolver<'a> {
    pub(crate) fn new(registry: &'a AgentRegistry, telemetry: &'a TelemetrySink) -> Self {
        Self {
            registry,
            telemetry,
        }
    }

    /// Resolves an agent identifier to its descriptor, recording the hand-off.
    pub fn resolve(&self, id: &str) -> Result<&'a AgentDescriptor, SwarmError> {
        match self.registry.get(id) {
            Ok(agent) => {
                tracing::info!(agent = id, "hand-off resolved");
                self.telemetry.emit("handoff.resolved", json!({ "agent": id }));
                Ok(agent)
            }
            Err(err) => {
                tracing::warn!(agent = id, "hand-off rejected for unknown agent");
                self.telemetry.emit("handoff.rejected", json!({ "agent": id }));
                Err(err)
            }
        }
    }
}
