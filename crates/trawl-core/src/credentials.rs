//! Credential validation.
//!
//! AWS access key ids carry their class in a four-letter prefix: `AKIA` for
//! long-lived IAM user keys and `ASIA` for short-lived STS keys. STS keys are
//! only usable together with a session token. Checking this locally turns an
//! opaque signature failure from the remote service into a message that says
//! which variable to fix.
//!
//! Secret values never leave this module in `Debug` output or logs.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::AwsEnv;
use crate::error::CredentialError;

/// Prefix of long-lived IAM user access key ids.
pub const PERMANENT_KEY_PREFIX: &str = "AKIA";

/// Prefix of STS-issued temporary access key ids.
pub const TEMPORARY_KEY_PREFIX: &str = "ASIA";

/// A validated credential set, ready to hand to an SDK client.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
    pub region: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialType {
    Temporary,
    Permanent,
}

impl CredentialType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialType::Temporary => "temporary",
            CredentialType::Permanent => "permanent",
        }
    }
}

impl fmt::Display for CredentialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Redacted view of the credential environment, safe to log or return to a
/// browser.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialStatus {
    pub access_key_id_set: bool,
    pub secret_access_key_set: bool,
    pub session_token_set: bool,
    pub region: String,
    pub credential_type: CredentialType,
    pub access_key_hint: Option<String>,
    pub valid: bool,
    pub error: Option<String>,
}

/// Checks an [`AwsEnv`] snapshot. Every method is a pure read.
#[derive(Debug, Clone, Copy)]
pub struct CredentialValidator<'a> {
    env: &'a AwsEnv,
}

impl<'a> CredentialValidator<'a> {
    pub fn new(env: &'a AwsEnv) -> Self {
        Self { env }
    }

    /// Validate presence and shape of the credentials.
    ///
    /// Checks run in order: both key id and secret present, key id carries a
    /// recognized prefix, temporary key ids come with a session token.
    pub fn validate(&self) -> Result<Credentials, CredentialError> {
        let (Some(access_key_id), Some(secret_access_key)) =
            (&self.env.access_key_id, &self.env.secret_access_key)
        else {
            return Err(CredentialError::Missing);
        };

        if !access_key_id.starts_with(PERMANENT_KEY_PREFIX)
            && !access_key_id.starts_with(TEMPORARY_KEY_PREFIX)
        {
            return Err(CredentialError::InvalidAccessKeyFormat);
        }

        if access_key_id.starts_with(TEMPORARY_KEY_PREFIX) && self.env.session_token.is_none() {
            return Err(CredentialError::MissingSessionToken);
        }

        Ok(Credentials {
            access_key_id: access_key_id.clone(),
            secret_access_key: secret_access_key.clone(),
            session_token: self.env.session_token.clone(),
            region: self.env.region().to_string(),
        })
    }

    /// The validated credentials, or `None` if validation fails.
    pub fn get_credentials(&self) -> Option<Credentials> {
        self.validate().ok()
    }

    /// The validation failure message, or `None` if the credentials are usable.
    pub fn error_message(&self) -> Option<String> {
        self.validate().err().map(|e| e.to_string())
    }

    /// True iff the access key id has the temporary prefix. Does not depend
    /// on whether validation passes.
    pub fn is_temporary(&self) -> bool {
        self.env
            .access_key_id
            .as_deref()
            .is_some_and(|id| id.starts_with(TEMPORARY_KEY_PREFIX))
    }

    pub fn credential_type(&self) -> CredentialType {
        if self.is_temporary() {
            CredentialType::Temporary
        } else {
            CredentialType::Permanent
        }
    }

    /// Whether both the key id and the secret are present, regardless of
    /// their format.
    pub fn has_credentials(&self) -> bool {
        self.env.access_key_id.is_some() && self.env.secret_access_key.is_some()
    }

    pub fn status(&self) -> CredentialStatus {
        let error = self.error_message();
        CredentialStatus {
            access_key_id_set: self.env.access_key_id.is_some(),
            secret_access_key_set: self.env.secret_access_key.is_some(),
            session_token_set: self.env.session_token.is_some(),
            region: self.env.region().to_string(),
            credential_type: self.credential_type(),
            access_key_hint: self.env.access_key_id.as_deref().map(redact_access_key),
            valid: error.is_none(),
            error,
        }
    }

    /// Log which credential variables are set. Values are never logged.
    pub fn log_status(&self) {
        let status = self.status();
        info!(
            access_key_id_set = status.access_key_id_set,
            secret_access_key_set = status.secret_access_key_set,
            session_token_set = status.session_token_set,
            region = %status.region,
            credential_type = %status.credential_type,
            valid = status.valid,
            "aws credential status"
        );
    }
}

impl Credentials {
    pub fn credential_type(&self) -> CredentialType {
        if self.access_key_id.starts_with(TEMPORARY_KEY_PREFIX) {
            CredentialType::Temporary
        } else {
            CredentialType::Permanent
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &redact_access_key(&self.access_key_id))
            .field("secret_access_key", &"<redacted>")
            .field("session_token", &self.session_token.as_ref().map(|_| "<redacted>"))
            .field("region", &self.region)
            .finish()
    }
}

/// Keep the first and last four characters of an access key id.
pub fn redact_access_key(key: &str) -> String {
    if key.len() <= 8 || !key.is_ascii() {
        return "****".to_string();
    }
    let prefix = &key[..4];
    let suffix = &key[key.len() - 4..];
    format!("{prefix}...{suffix}")
}
