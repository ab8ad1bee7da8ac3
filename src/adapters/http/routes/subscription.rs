use axum::{
    Json, Router,
    extract::State,
    http::HeaderMap,
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    adapters::http::{app_state::AppState, extract::BearerToken},
    app_error::{AppError, AppResult},
    domain::entities::subscription::Subscription,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_subscription_context))
        .route("/debug", get(debug_subscription))
}

/// GET /api/subscription
async fn get_subscription_context(
    State(app_state): State<AppState>,
    token: BearerToken,
) -> AppResult<impl IntoResponse> {
    let (_, ctx) = app_state
        .subscription_use_cases
        .resolve_context(token.as_str())
        .await?;
    Ok(Json(ctx))
}

#[derive(Serialize)]
struct DebugSubscriptionResponse {
    user_id: Uuid,
    email: Option<String>,
    has_subscription: bool,
    status: Option<String>,
    plan_type: Option<String>,
    has_billing_customer: bool,
    is_active: bool,
    is_premium: bool,
    subscription: Option<Subscription>,
}

/// GET /api/subscription/debug
/// Raw subscription state for troubleshooting entitlement issues
async fn debug_subscription(
    State(app_state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    if !app_state.config.enable_debug_routes {
        return Err(AppError::NotFound);
    }

    let token = BearerToken::from_headers(&headers)?;
    let (user, ctx) = app_state
        .subscription_use_cases
        .resolve_context(token.as_str())
        .await?;

    let sub = ctx.subscription.as_ref();
    Ok(Json(DebugSubscriptionResponse {
        user_id: user.id,
        email: user.email,
        has_subscription: sub.is_some(),
        status: sub.map(|s| s.status.to_string()),
        plan_type: sub.and_then(|s| s.plan_type.as_ref()).map(|p| p.to_string()),
        has_billing_customer: sub.and_then(Subscription::customer_id).is_some(),
        is_active: ctx.is_active,
        is_premium: ctx.is_premium,
        subscription: ctx.subscription,
    }))
}
