use std::fmt;

use thiserror::Error;

use trawl_core::credentials::CredentialType;
use trawl_core::error::{ConfigError, CredentialError};

use crate::classify::RemoteErrorKind;

/// A failure reported by the agent service, before classification.
///
/// `name` is the service's error code (e.g. `AccessDeniedException`), or the
/// SDK failure category when the request never got a service response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{name}: {message}")]
pub struct RemoteFailure {
    pub name: String,
    pub message: String,
}

impl RemoteFailure {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    Credentials(#[from] CredentialError),

    #[error(transparent)]
    Agent(#[from] ConfigError),
}

/// A classified remote failure.
#[derive(Debug, Clone)]
pub struct RemoteError {
    pub kind: RemoteErrorKind,
    pub failure: RemoteFailure,
    pub credential_type: CredentialType,
}

impl RemoteError {
    pub fn new(failure: RemoteFailure, credential_type: CredentialType) -> Self {
        Self {
            kind: RemoteErrorKind::from_name(&failure.name),
            failure,
            credential_type,
        }
    }

    /// The fixed message for a recognized kind, else the raw remote message,
    /// else [`FALLBACK_HEADLINE`].
    pub fn headline(&self) -> &str {
        match self.kind.headline() {
            Some(headline) => headline,
            None if self.failure.message.trim().is_empty() => FALLBACK_HEADLINE,
            None => &self.failure.message,
        }
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.headline())
    }
}

impl std::error::Error for RemoteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.failure)
    }
}

/// Headline used when the service gives neither a known code nor a message.
pub const FALLBACK_HEADLINE: &str = "Failed to invoke Bedrock Agent";

/// Everything that can end an invocation without a result.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("Message is required")]
    ClientInput,

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl InvokeError {
    /// Machine-readable error category. Remote errors report the remote
    /// failure name unchanged.
    pub fn error_type(&self) -> &str {
        match self {
            InvokeError::ClientInput => "ClientInputError",
            InvokeError::Configuration(_) => "ConfigurationError",
            InvokeError::Remote(e) => e.failure.name.as_str(),
        }
    }

    pub fn suggestion(&self) -> &'static str {
        match self {
            InvokeError::ClientInput => "Provide a non-empty message or url in the request body.",
            InvokeError::Configuration(ConfigurationError::Credentials(_)) => {
                "Set valid AWS credentials in the server environment and restart it."
            }
            InvokeError::Configuration(ConfigurationError::Agent(_)) => {
                "Set BEDROCK_AGENT_ID and BEDROCK_AGENT_ALIAS_ID in the server environment and restart it."
            }
            InvokeError::Remote(e) => e.kind.suggestion(),
        }
    }

    /// Full diagnostic text. For remote errors this is `<name>: <raw message>`.
    pub fn details(&self) -> String {
        match self {
            InvokeError::Remote(e) => e.failure.to_string(),
            other => other.to_string(),
        }
    }
}
