//! Billing routes: hosted customer portal.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
    routing::post,
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::{app_state::AppState, extract::BearerToken},
    app_error::AppResult,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/portal", post(create_portal))
}

#[derive(Deserialize)]
struct CreatePortalPayload {
    #[serde(default)]
    return_url: Option<String>,
}

#[derive(Serialize)]
struct PortalResponse {
    url: String,
}

/// POST /api/billing/portal
/// Creates a Stripe customer portal session for the caller
async fn create_portal(
    State(app_state): State<AppState>,
    token: BearerToken,
    payload: Result<Json<CreatePortalPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    // A malformed body is reported as a missing return_url, after authentication.
    let return_url = match payload {
        Ok(Json(payload)) => payload.return_url,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable billing portal payload");
            None
        }
    };

    let session = app_state
        .billing_portal_use_cases
        .create_portal_session(token.as_str(), return_url.as_deref())
        .await?;

    Ok(Json(PortalResponse { url: session.url }))
}
