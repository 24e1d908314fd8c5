use trawl_agent::classify::RemoteErrorKind;
use trawl_agent::error::{FALLBACK_HEADLINE, RemoteError, RemoteFailure};
use trawl_core::credentials::CredentialType;

#[test]
fn known_names_map_to_kinds() {
    let cases = [
        ("InvalidSignatureException", RemoteErrorKind::AuthSignatureInvalid),
        ("ExpiredTokenException", RemoteErrorKind::CredentialsExpired),
        ("AccessDeniedException", RemoteErrorKind::AuthorizationDenied),
        ("ResourceNotFoundException", RemoteErrorKind::AgentNotFound),
        ("ValidationException", RemoteErrorKind::InvalidRequestParameters),
    ];

    for (name, kind) in cases {
        assert_eq!(RemoteErrorKind::from_name(name), kind, "{name}");
        assert!(kind.headline().is_some());
        assert!(!kind.suggestion().is_empty());
    }
}

#[test]
fn anything_else_is_unclassified() {
    for name in ["", "ThrottlingException", "accessdeniedexception", "DispatchFailure"] {
        assert_eq!(
            RemoteErrorKind::from_name(name),
            RemoteErrorKind::UnclassifiedRemoteError
        );
    }
    assert_eq!(RemoteErrorKind::UnclassifiedRemoteError.headline(), None);
    assert_eq!(RemoteErrorKind::UnclassifiedRemoteError.suggestion(), "");
}

#[test]
fn remote_error_keeps_raw_failure() {
    let failure = RemoteFailure::new("ResourceNotFoundException", "Agent AGENT1 not found");
    let error = RemoteError::new(failure.clone(), CredentialType::Permanent);

    assert_eq!(error.kind, RemoteErrorKind::AgentNotFound);
    assert_eq!(error.to_string(), "Bedrock Agent not found");
    assert_eq!(error.failure, failure);
    assert_eq!(
        failure.to_string(),
        "ResourceNotFoundException: Agent AGENT1 not found"
    );
}

#[test]
fn unclassified_failure_without_message_uses_fallback_headline() {
    for message in ["", "   "] {
        let error = RemoteError::new(
            RemoteFailure::new("InternalServerException", message),
            CredentialType::Permanent,
        );
        assert_eq!(error.kind, RemoteErrorKind::UnclassifiedRemoteError);
        assert_eq!(error.to_string(), FALLBACK_HEADLINE);
    }
}

#[test]
fn classified_failure_without_message_keeps_fixed_headline() {
    let error = RemoteError::new(
        RemoteFailure::new("AccessDeniedException", ""),
        CredentialType::Temporary,
    );
    assert_eq!(error.to_string(), "Access denied to Bedrock Agent");
}
