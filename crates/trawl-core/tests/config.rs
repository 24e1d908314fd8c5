use std::collections::HashMap;

use trawl_core::config::{AgentTarget, DEFAULT_REGION, Settings};
use trawl_core::error::ConfigError;

fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn reads_all_variables() {
    let s = settings(&[
        ("AWS_ACCESS_KEY_ID", "AKIAEXAMPLEKEY12"),
        ("AWS_SECRET_ACCESS_KEY", "secret"),
        ("AWS_SESSION_TOKEN", "token"),
        ("AWS_REGION", "eu-central-1"),
        ("BEDROCK_AGENT_ID", "AGENT12345"),
        ("BEDROCK_AGENT_ALIAS_ID", "ALIAS12345"),
        ("TRAWL_BIND_ADDR", "127.0.0.1:8080"),
    ])
    .unwrap();

    assert_eq!(s.aws.access_key_id.as_deref(), Some("AKIAEXAMPLEKEY12"));
    assert_eq!(s.aws.region(), "eu-central-1");
    assert_eq!(s.bind_addr.port(), 8080);
    assert_eq!(
        s.agent.target().unwrap(),
        AgentTarget {
            agent_id: "AGENT12345".to_string(),
            agent_alias_id: "ALIAS12345".to_string(),
        }
    );
}

#[test]
fn empty_values_count_as_unset() {
    let s = settings(&[
        ("AWS_ACCESS_KEY_ID", ""),
        ("AWS_REGION", ""),
        ("BEDROCK_AGENT_ID", ""),
    ])
    .unwrap();

    assert!(s.aws.access_key_id.is_none());
    assert_eq!(s.aws.region(), DEFAULT_REGION);
    assert!(s.agent.agent_id.is_none());
}

#[test]
fn missing_alias_is_missing_agent() {
    let s = settings(&[("BEDROCK_AGENT_ID", "AGENT12345")]).unwrap();
    assert!(matches!(s.agent.target(), Err(ConfigError::MissingAgent)));
}

#[test]
fn default_bind_addr() {
    let s = settings(&[]).unwrap();
    assert_eq!(s.bind_addr.to_string(), "0.0.0.0:3000");
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = settings(&[("TRAWL_BIND_ADDR", "not-an-address")]).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidValue {
            key: "TRAWL_BIND_ADDR",
            ..
        }
    ));
}

#[test]
fn detects_lambda_environment() {
    assert!(!settings(&[]).unwrap().in_lambda);
    assert!(
        settings(&[("AWS_LAMBDA_RUNTIME_API", "127.0.0.1:9001")])
            .unwrap()
            .in_lambda
    );
}
