use axum::Json;
use axum::extract::State;

use trawl_core::credentials::CredentialStatus;

use crate::state::AppState;

/// Which credential variables are set and whether they validate. Never
/// includes secret values.
pub async fn credential_status(State(state): State<AppState>) -> Json<CredentialStatus> {
    Json(state.invoker.validator().status())
}
