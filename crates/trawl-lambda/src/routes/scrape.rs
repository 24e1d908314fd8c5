use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use trawl_core::models::invocation::InvocationResult;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub message: Option<String>,
    /// Shorthand for `message: "Scrape this URL: <url>"`.
    #[serde(default)]
    pub url: Option<String>,
}

impl ScrapeRequest {
    /// The text sent to the agent. A non-blank `message` wins over `url`.
    pub fn prompt(&self) -> String {
        let message = self.message.as_deref().filter(|m| !m.trim().is_empty());
        let url = self.url.as_deref().map(str::trim).filter(|u| !u.is_empty());

        match (message, url) {
            (Some(message), _) => message.to_string(),
            (None, Some(url)) => format!("Scrape this URL: {url}"),
            (None, None) => String::new(),
        }
    }
}

/// Forward a message to the Bedrock agent and return the complete response.
pub async fn scrape(
    State(state): State<AppState>,
    payload: Result<Json<ScrapeRequest>, JsonRejection>,
) -> Result<Json<InvocationResult>, ApiError> {
    let credential_type = state.invoker.validator().credential_type();

    let Json(req) = payload.map_err(|e| ApiError::BadRequest {
        message: e.body_text(),
        credential_type,
    })?;

    let result = state
        .invoker
        .invoke(&req.prompt())
        .await
        .map_err(|source| ApiError::Invoke {
            source,
            credential_type,
        })?;

    Ok(Json(result))
}
