//! Premium area. Every route here sits behind the active-subscription guard.

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    middleware,
    routing::get,
};
use serde::Serialize;

use crate::{
    adapters::http::{app_state::AppState, middleware::require_active_subscription},
    domain::entities::entitlement::{FeatureAccess, SubscriptionContext, UpgradePrompt},
};

pub fn router(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/features/{feature}", get(get_feature_access))
        .route_layer(middleware::from_fn_with_state(
            app_state,
            require_active_subscription,
        ))
}

#[derive(Serialize)]
struct FeatureAccessResponse {
    feature: String,
    granted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    prompt: Option<UpgradePrompt>,
}

/// GET /api/premium/features/{feature}
async fn get_feature_access(
    State(app_state): State<AppState>,
    Extension(ctx): Extension<SubscriptionContext>,
    Path(feature): Path<String>,
) -> Json<FeatureAccessResponse> {
    let response = match app_state.entitlement_gate.feature_access(&ctx, &feature) {
        FeatureAccess::Granted => FeatureAccessResponse {
            feature,
            granted: true,
            prompt: None,
        },
        FeatureAccess::Denied(prompt) => FeatureAccessResponse {
            feature,
            granted: false,
            prompt: Some(prompt),
        },
    };
    Json(response)
}
