//! The invocation adapter: one user message in, one materialized result or
//! one classified error out.

use std::sync::Arc;

use tracing::{info, warn};

use trawl_core::config::Settings;
use trawl_core::credentials::CredentialValidator;
use trawl_core::models::invocation::InvocationResult;
use trawl_core::session::new_session_id;

use crate::error::{ConfigurationError, InvokeError, RemoteError};
use crate::runtime::{AgentRequest, AgentRuntime};
use crate::stream::drain;

/// Invokes the configured agent through an [`AgentRuntime`].
///
/// Holds no per-request state, so one instance can serve any number of
/// concurrent invocations.
pub struct Invoker<R> {
    settings: Arc<Settings>,
    runtime: R,
}

impl<R: AgentRuntime> Invoker<R> {
    pub fn new(settings: Arc<Settings>, runtime: R) -> Self {
        Self { settings, runtime }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn validator(&self) -> CredentialValidator<'_> {
        CredentialValidator::new(&self.settings.aws)
    }

    /// Send `message` to the agent and collect the full response.
    ///
    /// Rejects an empty message, then missing or malformed credentials, then
    /// a missing agent id or alias, each before any remote call. Exactly one
    /// remote attempt is made; there are no retries.
    pub async fn invoke(&self, message: &str) -> Result<InvocationResult, InvokeError> {
        if message.trim().is_empty() {
            return Err(InvokeError::ClientInput);
        }

        let validator = self.validator();
        let credentials = validator
            .validate()
            .map_err(ConfigurationError::from)?;
        let target = self
            .settings
            .agent
            .target()
            .map_err(ConfigurationError::from)?;

        let credential_type = credentials.credential_type();
        let session_id = new_session_id();

        info!(
            agent_id = %target.agent_id,
            agent_alias_id = %target.agent_alias_id,
            session_id = %session_id,
            credential_type = %credential_type,
            "invoking bedrock agent"
        );

        let request = AgentRequest {
            agent_id: target.agent_id,
            agent_alias_id: target.agent_alias_id,
            session_id: session_id.clone(),
            input_text: message.to_string(),
        };

        let outcome = match self.runtime.invoke_agent(&credentials, request).await {
            Ok(response) => drain(response.completion).await,
            Err(failure) => Err(failure),
        };

        let drained = outcome.map_err(|failure| {
            let error = RemoteError::new(failure, credential_type);
            warn!(
                session_id = %session_id,
                error_type = %error.failure.name,
                kind = ?error.kind,
                "bedrock agent invocation failed"
            );
            error
        })?;

        info!(
            session_id = %session_id,
            response_len = drained.text.len(),
            trace_count = drained.trace.len(),
            "agent response received"
        );

        Ok(InvocationResult {
            response: drained.text,
            trace: drained.trace,
            session_id,
            credential_type,
        })
    }
}
