//! The seam between the invocation logic and the agent service.

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::BoxStream;

use trawl_core::credentials::Credentials;
use trawl_core::models::invocation::TraceEntry;

use crate::error::RemoteFailure;

/// Events of a completion stream, in arrival order. A failure ends the stream.
pub type CompletionStream = BoxStream<'static, Result<CompletionEvent, RemoteFailure>>;

/// One `InvokeAgent` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRequest {
    pub agent_id: String,
    pub agent_alias_id: String,
    pub session_id: String,
    pub input_text: String,
}

pub struct AgentResponse {
    /// `None` when the service returned no streamed payload.
    pub completion: Option<CompletionStream>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompletionEvent {
    /// Raw bytes of generated text.
    Chunk(Vec<u8>),
    Trace(TraceEntry),
    /// Event kinds this service does not consume (return-control, files).
    Other,
}

/// Something that can invoke an agent with a given credential set.
///
/// Implementations construct their client from `credentials` on every call;
/// nothing is cached between invocations.
#[async_trait]
pub trait AgentRuntime: Send + Sync {
    async fn invoke_agent(
        &self,
        credentials: &Credentials,
        request: AgentRequest,
    ) -> Result<AgentResponse, RemoteFailure>;
}

#[async_trait]
impl<T: AgentRuntime + ?Sized> AgentRuntime for Arc<T> {
    async fn invoke_agent(
        &self,
        credentials: &Credentials,
        request: AgentRequest,
    ) -> Result<AgentResponse, RemoteFailure> {
        (**self).invoke_agent(credentials, request).await
    }
}
