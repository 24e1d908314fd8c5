use std::sync::Arc;

use trawl_agent::invoke::Invoker;
use trawl_agent::runtime::AgentRuntime;
use trawl_core::config::Settings;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub invoker: Arc<Invoker<Arc<dyn AgentRuntime>>>,
}

impl AppState {
    pub fn new(settings: Arc<Settings>, runtime: Arc<dyn AgentRuntime>) -> Self {
        Self {
            invoker: Arc::new(Invoker::new(settings, runtime)),
        }
    }
}
