//! Mapping of agent service error codes onto a closed set of kinds.
//!
//! The table is keyed on the error code the service reports, so a change in
//! SDK type names does not move anything between kinds. Codes not listed
//! fall through to [`RemoteErrorKind::UnclassifiedRemoteError`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    AuthSignatureInvalid,
    CredentialsExpired,
    AuthorizationDenied,
    AgentNotFound,
    InvalidRequestParameters,
    UnclassifiedRemoteError,
}

impl RemoteErrorKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "InvalidSignatureException" => RemoteErrorKind::AuthSignatureInvalid,
            "ExpiredTokenException" => RemoteErrorKind::CredentialsExpired,
            "AccessDeniedException" => RemoteErrorKind::AuthorizationDenied,
            "ResourceNotFoundException" => RemoteErrorKind::AgentNotFound,
            "ValidationException" => RemoteErrorKind::InvalidRequestParameters,
            _ => RemoteErrorKind::UnclassifiedRemoteError,
        }
    }

    /// User-facing message. `None` for unclassified errors, which surface the
    /// remote message as is.
    pub fn headline(&self) -> Option<&'static str> {
        match self {
            RemoteErrorKind::AuthSignatureInvalid => Some("Invalid AWS credentials signature"),
            RemoteErrorKind::CredentialsExpired => Some("AWS session token has expired"),
            RemoteErrorKind::AuthorizationDenied => Some("Access denied to Bedrock Agent"),
            RemoteErrorKind::AgentNotFound => Some("Bedrock Agent not found"),
            RemoteErrorKind::InvalidRequestParameters => Some("Invalid request parameters"),
            RemoteErrorKind::UnclassifiedRemoteError => None,
        }
    }

    pub fn suggestion(&self) -> &'static str {
        match self {
            RemoteErrorKind::AuthSignatureInvalid => {
                "Please check that your AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, and AWS_SESSION_TOKEN (if using temporary credentials) are correct."
            }
            RemoteErrorKind::CredentialsExpired => {
                "Your temporary credentials have expired. Please refresh them from your AWS SSO portal or by running 'aws sts get-session-token' and update the server environment."
            }
            RemoteErrorKind::AuthorizationDenied => {
                "Please verify that your IAM user/role has the 'bedrock:InvokeAgent' permission for this agent."
            }
            RemoteErrorKind::AgentNotFound => {
                "Please verify that your BEDROCK_AGENT_ID and BEDROCK_AGENT_ALIAS_ID are correct and the agent exists in your AWS account."
            }
            RemoteErrorKind::InvalidRequestParameters => {
                "Please check that your Agent ID and Alias ID are in the correct format."
            }
            RemoteErrorKind::UnclassifiedRemoteError => "",
        }
    }
}
