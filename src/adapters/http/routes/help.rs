use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/contact", get(get_contact))
}

#[derive(Serialize)]
struct ContactResponse {
    phone: Option<String>,
}

/// GET /api/help/contact
async fn get_contact(State(app_state): State<AppState>) -> Json<ContactResponse> {
    Json(ContactResponse {
        phone: app_state.config.contact_phone.clone(),
    })
}
