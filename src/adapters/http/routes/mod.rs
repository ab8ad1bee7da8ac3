pub mod billing;
pub mod health;
pub mod help;
pub mod premium;
pub mod subscription;

use axum::Router;

use crate::adapters::http::app_state::AppState;

pub fn router(app_state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/billing", billing::router())
        .nest("/subscription", subscription::router())
        .nest("/premium", premium::router(app_state))
        .nest("/help", help::router())
        .nest("/health", health::router())
}
