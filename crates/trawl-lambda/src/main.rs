use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use trawl_agent::bedrock::BedrockAgentRuntime;
use trawl_agent::runtime::AgentRuntime;
use trawl_core::config::Settings;
use trawl_core::credentials::CredentialValidator;
use trawl_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let settings = Arc::new(Settings::from_env()?);
    CredentialValidator::new(&settings.aws).log_status();

    if settings.agent.target().is_err() {
        tracing::warn!("BEDROCK_AGENT_ID or BEDROCK_AGENT_ALIAS_ID is not set; scrape requests will fail");
    }

    let runtime: Arc<dyn AgentRuntime> = Arc::new(BedrockAgentRuntime);
    let app = trawl_lambda::app(AppState::new(settings.clone(), runtime));

    if settings.in_lambda {
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(settings.bind_addr).await?;
    tracing::info!(addr = %settings.bind_addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
