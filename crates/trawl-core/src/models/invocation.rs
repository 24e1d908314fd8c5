use serde::{Deserialize, Serialize};

use crate::credentials::CredentialType;

/// The complete output of one agent invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResult {
    /// Chunk text, concatenated in arrival order.
    pub response: String,
    /// Trace entries, in arrival order.
    pub trace: Vec<TraceEntry>,
    pub session_id: String,
    pub credential_type: CredentialType,
}

/// A diagnostic record emitted by the agent alongside its output.
///
/// The trace body is not interpreted; it is carried as the agent produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceEntry {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub agent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub agent_alias_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub agent_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub session_id: Option<String>,
    pub trace: serde_json::Value,
}
