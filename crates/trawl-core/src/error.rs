use thiserror::Error;

/// Why the environment-supplied credentials cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error(
        "Missing required AWS credentials. Please set AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY."
    )]
    Missing,

    #[error(
        "Invalid AWS_ACCESS_KEY_ID format. It should start with AKIA (permanent) or ASIA (temporary)."
    )]
    InvalidAccessKeyFormat,

    #[error(
        "Temporary credentials detected (starts with ASIA) but AWS_SESSION_TOKEN is missing. Please provide the session token."
    )]
    MissingSessionToken,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Bedrock Agent configuration missing. Please set BEDROCK_AGENT_ID and BEDROCK_AGENT_ALIAS_ID."
    )]
    MissingAgent,

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}
