//! [`AgentRuntime`] backed by the Bedrock Agent Runtime `InvokeAgent` API.
//!
//! ## Required IAM permissions
//!
//! ```text
//! bedrock:InvokeAgent
//! ```
//!
//! The credentials come from the validated environment snapshot, never from
//! the SDK's default provider chain, so the service only ever acts as the
//! identity it reports in its credential status.

use async_trait::async_trait;
use aws_sdk_bedrockagentruntime::Client;
use aws_sdk_bedrockagentruntime::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_bedrockagentruntime::types::{ResponseStream, TracePart};
use futures::StreamExt;

use trawl_core::credentials::Credentials;
use trawl_core::models::invocation::TraceEntry;

use crate::error::RemoteFailure;
use crate::runtime::{AgentRequest, AgentResponse, AgentRuntime, CompletionEvent};

/// Provider name recorded on SDK credentials built from the environment.
const PROVIDER_NAME: &str = "trawl-env";

#[derive(Debug, Clone, Copy, Default)]
pub struct BedrockAgentRuntime;

/// Build an `SdkConfig` pinned to the given credentials and their region.
pub async fn build_aws_config(credentials: &Credentials) -> aws_config::SdkConfig {
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(credentials.region.clone()))
        .credentials_provider(aws_sdk_bedrockagentruntime::config::Credentials::new(
            &credentials.access_key_id,
            &credentials.secret_access_key,
            credentials.session_token.clone(),
            None,
            PROVIDER_NAME,
        ))
        .load()
        .await
}

#[async_trait]
impl AgentRuntime for BedrockAgentRuntime {
    async fn invoke_agent(
        &self,
        credentials: &Credentials,
        request: AgentRequest,
    ) -> Result<AgentResponse, RemoteFailure> {
        let config = build_aws_config(credentials).await;
        let client = Client::new(&config);

        let output = client
            .invoke_agent()
            .agent_id(request.agent_id)
            .agent_alias_id(request.agent_alias_id)
            .session_id(request.session_id)
            .input_text(request.input_text)
            .send()
            .await
            .map_err(|e| remote_failure(&e))?;

        let completion = futures::stream::unfold(Some(output.completion), |receiver| async move {
            let mut receiver = receiver?;
            match receiver.recv().await {
                Ok(Some(event)) => Some((Ok(completion_event(event)), Some(receiver))),
                Ok(None) => None,
                // Yield the failure, then stop.
                Err(e) => Some((Err(remote_failure(&e)), None)),
            }
        })
        .boxed();

        Ok(AgentResponse {
            completion: Some(completion),
        })
    }
}

fn completion_event(event: ResponseStream) -> CompletionEvent {
    match event {
        ResponseStream::Chunk(part) => {
            CompletionEvent::Chunk(part.bytes.map(|b| b.into_inner()).unwrap_or_default())
        }
        ResponseStream::Trace(part) => CompletionEvent::Trace(trace_entry(&part)),
        _ => CompletionEvent::Other,
    }
}

/// The SDK trace types have no serde support; the trace body is carried as
/// its debug rendering.
fn trace_entry(part: &TracePart) -> TraceEntry {
    TraceEntry {
        agent_id: part.agent_id().map(str::to_string),
        agent_alias_id: part.agent_alias_id().map(str::to_string),
        agent_version: part.agent_version().map(str::to_string),
        session_id: part.session_id().map(str::to_string),
        trace: part
            .trace()
            .map(|t| serde_json::Value::String(format!("{t:?}")))
            .unwrap_or(serde_json::Value::Null),
    }
}

/// Extract the error code and message from an SDK error.
///
/// Service errors report their code (e.g. `ExpiredTokenException`). Errors
/// that never reached the service are named after their SDK category.
fn remote_failure<E, R>(err: &SdkError<E, R>) -> RemoteFailure
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let name = match err {
        SdkError::ServiceError(_) => err.code().unwrap_or("ServiceError"),
        SdkError::ConstructionFailure(_) => "ConstructionFailure",
        SdkError::TimeoutError(_) => "TimeoutError",
        SdkError::DispatchFailure(_) => "DispatchFailure",
        SdkError::ResponseError(_) => "ResponseError",
        _ => err.code().unwrap_or("UnknownError"),
    };

    let message = err
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| DisplayErrorContext(err).to_string());

    RemoteFailure::new(name, message)
}

#[cfg(test)]
mod tests {
    use aws_sdk_bedrockagentruntime::config::http::HttpResponse;
    use aws_sdk_bedrockagentruntime::error::ErrorMetadata;
    use aws_sdk_bedrockagentruntime::operation::invoke_agent::InvokeAgentError;
    use aws_sdk_bedrockagentruntime::primitives::Blob;
    use aws_sdk_bedrockagentruntime::types::PayloadPart;
    use aws_smithy_runtime_api::http::StatusCode;
    use aws_smithy_types::body::SdkBody;

    use super::*;
    use crate::classify::RemoteErrorKind;

    fn http_response(status: u16) -> HttpResponse {
        HttpResponse::new(
            StatusCode::try_from(status).expect("valid status"),
            SdkBody::empty(),
        )
    }

    #[test]
    fn service_error_is_named_by_its_code() {
        let err = SdkError::service_error(
            InvokeAgentError::generic(
                ErrorMetadata::builder()
                    .code("ExpiredTokenException")
                    .message("The security token included in the request is expired")
                    .build(),
            ),
            http_response(403),
        );

        let failure = remote_failure(&err);

        assert_eq!(failure.name, "ExpiredTokenException");
        assert_eq!(
            failure.message,
            "The security token included in the request is expired"
        );
        assert_eq!(
            RemoteErrorKind::from_name(&failure.name),
            RemoteErrorKind::CredentialsExpired
        );
    }

    #[test]
    fn service_error_without_code_is_generic() {
        let err = SdkError::service_error(
            InvokeAgentError::generic(ErrorMetadata::builder().message("boom").build()),
            http_response(500),
        );

        let failure = remote_failure(&err);

        assert_eq!(failure.name, "ServiceError");
        assert_eq!(failure.message, "boom");
    }

    #[test]
    fn timeout_is_named_after_sdk_category() {
        let err = SdkError::<InvokeAgentError, HttpResponse>::timeout_error("request timed out");

        let failure = remote_failure(&err);

        assert_eq!(failure.name, "TimeoutError");
        assert!(!failure.message.is_empty());
        assert_eq!(
            RemoteErrorKind::from_name(&failure.name),
            RemoteErrorKind::UnclassifiedRemoteError
        );
    }

    #[test]
    fn chunk_event_carries_its_bytes() {
        let event = ResponseStream::Chunk(
            PayloadPart::builder()
                .bytes(Blob::new(b"Hello, world".to_vec()))
                .build(),
        );

        assert_eq!(
            completion_event(event),
            CompletionEvent::Chunk(b"Hello, world".to_vec())
        );
    }

    #[test]
    fn empty_chunk_event_has_no_bytes() {
        let event = ResponseStream::Chunk(PayloadPart::builder().build());
        assert_eq!(completion_event(event), CompletionEvent::Chunk(Vec::new()));
    }

    #[test]
    fn trace_event_keeps_ids() {
        let event = ResponseStream::Trace(
            TracePart::builder()
                .agent_id("AGENT12345")
                .agent_alias_id("ALIAS12345")
                .agent_version("1")
                .session_id("session-1-abc")
                .build(),
        );

        let CompletionEvent::Trace(entry) = completion_event(event) else {
            panic!("expected a trace event");
        };

        assert_eq!(entry.agent_id.as_deref(), Some("AGENT12345"));
        assert_eq!(entry.agent_alias_id.as_deref(), Some("ALIAS12345"));
        assert_eq!(entry.agent_version.as_deref(), Some("1"));
        assert_eq!(entry.session_id.as_deref(), Some("session-1-abc"));
        assert_eq!(entry.trace, serde_json::Value::Null);
    }
}
