use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use trawl_agent::error::InvokeError;
use trawl_core::credentials::CredentialType;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be read as a scrape request.
    BadRequest {
        message: String,
        credential_type: CredentialType,
    },
    Invoke {
        source: InvokeError,
        credential_type: CredentialType,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: String,
    pub suggestion: String,
    pub error_type: String,
    pub details: String,
    pub credential_type: CredentialType,
}

impl ApiError {
    /// Client input → 400, configuration → 500, remote service → 502.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Invoke { source, .. } => match source {
                InvokeError::ClientInput => StatusCode::BAD_REQUEST,
                InvokeError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
                InvokeError::Remote(_) => StatusCode::BAD_GATEWAY,
            },
        }
    }

    pub fn body(&self) -> ErrorBody {
        match self {
            ApiError::BadRequest {
                message,
                credential_type,
            } => ErrorBody {
                error: "Invalid request body".to_string(),
                suggestion: "Send a JSON object with a \"message\" or \"url\" field.".to_string(),
                error_type: "ClientInputError".to_string(),
                details: message.clone(),
                credential_type: *credential_type,
            },
            ApiError::Invoke {
                source,
                credential_type,
            } => {
                let credential_type = match source {
                    InvokeError::Remote(e) => e.credential_type,
                    _ => *credential_type,
                };
                ErrorBody {
                    error: source.to_string(),
                    suggestion: source.suggestion().to_string(),
                    error_type: source.error_type().to_string(),
                    details: source.details(),
                    credential_type,
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.body();

        if status.is_server_error() {
            tracing::error!(
                status = status.as_u16(),
                error_type = %body.error_type,
                "scrape failed: {}",
                body.details
            );
        }

        (status, Json(body)).into_response()
    }
}
