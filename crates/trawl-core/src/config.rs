//! Process configuration, captured once at startup.
//!
//! Nothing downstream reads the environment directly. The binary builds a
//! [`Settings`] with [`Settings::from_env`] and hands it to the validator and
//! the adapter; tests build one with [`Settings::from_lookup`].

use std::fmt;
use std::net::SocketAddr;

use crate::error::ConfigError;

pub const ACCESS_KEY_ID_VAR: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_ACCESS_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";
pub const SESSION_TOKEN_VAR: &str = "AWS_SESSION_TOKEN";
pub const REGION_VAR: &str = "AWS_REGION";
pub const AGENT_ID_VAR: &str = "BEDROCK_AGENT_ID";
pub const AGENT_ALIAS_ID_VAR: &str = "BEDROCK_AGENT_ALIAS_ID";
pub const BIND_ADDR_VAR: &str = "TRAWL_BIND_ADDR";
/// Set by the Lambda execution environment.
pub const LAMBDA_RUNTIME_API_VAR: &str = "AWS_LAMBDA_RUNTIME_API";

/// Region used when `AWS_REGION` is unset.
pub const DEFAULT_REGION: &str = "us-east-1";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Everything the service reads from its environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub aws: AwsEnv,
    pub agent: AgentConfig,
    pub bind_addr: SocketAddr,
    /// Whether the process runs inside AWS Lambda.
    pub in_lambda: bool,
}

/// Raw AWS credential variables, exactly as found. Validation happens in
/// [`crate::credentials::CredentialValidator`].
#[derive(Clone, Default)]
pub struct AwsEnv {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
    pub region: Option<String>,
}

/// Identifiers of the Bedrock agent and alias to invoke.
#[derive(Debug, Clone, Default)]
pub struct AgentConfig {
    pub agent_id: Option<String>,
    pub agent_alias_id: Option<String>,
}

/// A fully specified agent target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentTarget {
    pub agent_id: String,
    pub agent_alias_id: String,
}

impl Settings {
    /// Snapshot the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Empty values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let bind_addr = get(BIND_ADDR_VAR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                key: BIND_ADDR_VAR,
                reason: e.to_string(),
            })?;

        Ok(Self {
            aws: AwsEnv {
                access_key_id: get(ACCESS_KEY_ID_VAR),
                secret_access_key: get(SECRET_ACCESS_KEY_VAR),
                session_token: get(SESSION_TOKEN_VAR),
                region: get(REGION_VAR),
            },
            agent: AgentConfig {
                agent_id: get(AGENT_ID_VAR),
                agent_alias_id: get(AGENT_ALIAS_ID_VAR),
            },
            bind_addr,
            in_lambda: get(LAMBDA_RUNTIME_API_VAR).is_some(),
        })
    }
}

impl AwsEnv {
    /// Configured region, or [`DEFAULT_REGION`].
    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or(DEFAULT_REGION)
    }
}

impl AgentConfig {
    /// Both identifiers, or [`ConfigError::MissingAgent`] if either is absent.
    pub fn target(&self) -> Result<AgentTarget, ConfigError> {
        match (&self.agent_id, &self.agent_alias_id) {
            (Some(agent_id), Some(agent_alias_id)) => Ok(AgentTarget {
                agent_id: agent_id.clone(),
                agent_alias_id: agent_alias_id.clone(),
            }),
            _ => Err(ConfigError::MissingAgent),
        }
    }
}

impl fmt::Debug for AwsEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsEnv")
            .field("access_key_id", &self.access_key_id.as_ref().map(|_| "<set>"))
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| "<redacted>"),
            )
            .field("session_token", &self.session_token.as_ref().map(|_| "<redacted>"))
            .field("region", &self.region)
            .finish()
    }
}
