use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    adapters::http::{app_state::AppState, extract::BearerToken},
    app_error::AppError,
    domain::entities::entitlement::GateDecision,
};

/// Route guard for premium pages.
///
/// Callers without an active subscription are redirected to the configured
/// fallback: `303 See Other` when the gate asks to replace the location,
/// `307 Temporary Redirect` otherwise. On success the resolved `AuthUser` and
/// `SubscriptionContext` are stored in request extensions.
pub async fn require_active_subscription(
    State(app_state): State<AppState>,
    token: BearerToken,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (user, ctx) = app_state
        .subscription_use_cases
        .resolve_context(token.as_str())
        .await?;

    match app_state.entitlement_gate.decide(&ctx) {
        GateDecision::Allow => {
            request.extensions_mut().insert(user);
            request.extensions_mut().insert(ctx);
            Ok(next.run(request).await)
        }
        GateDecision::Redirect { to, replace } => {
            tracing::debug!(
                user_id = %user.id,
                redirect_to = %to,
                replace,
                "No active subscription, redirecting"
            );
            Ok(redirect_response(&to, replace))
        }
    }
}

fn redirect_response(to: &str, replace: bool) -> Response {
    if replace {
        Redirect::to(to).into_response()
    } else {
        Redirect::temporary(to).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, header::LOCATION};

    #[test]
    fn replacing_redirect_is_see_other() {
        let response = redirect_response("/dashboard", true);
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/dashboard");
    }

    #[test]
    fn non_replacing_redirect_is_temporary() {
        let response = redirect_response("/dashboard", false);
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[LOCATION], "/dashboard");
    }
}
