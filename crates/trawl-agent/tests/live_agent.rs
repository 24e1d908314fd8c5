//! Integration test against a real Bedrock agent.
//!
//! Requires `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` (and
//! `AWS_SESSION_TOKEN` for temporary keys), `BEDROCK_AGENT_ID` and
//! `BEDROCK_AGENT_ALIAS_ID` in the environment.
//!
//! Run with: `cargo test -p trawl-agent --test live_agent -- --ignored`

use std::sync::Arc;

use trawl_agent::bedrock::BedrockAgentRuntime;
use trawl_agent::invoke::Invoker;
use trawl_core::config::Settings;

#[tokio::test]
#[ignore]
async fn invoke_configured_agent() {
    let settings = Arc::new(Settings::from_env().expect("settings should load"));
    let invoker = Invoker::new(settings, BedrockAgentRuntime);

    let result = invoker
        .invoke("Scrape this URL: https://example.com")
        .await
        .expect("invocation should succeed");

    println!("session: {}", result.session_id);
    println!("credential type: {}", result.credential_type);
    println!("trace entries: {}", result.trace.len());
    println!("{}", result.response);

    assert!(!result.response.is_empty());
}
