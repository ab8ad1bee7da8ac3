use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

const GENERIC_SERVER_ERROR: &str = "Internal server error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidCredentials
            | AppError::InvalidInput(_)
            | AppError::NoBillingCustomer
            | AppError::NotFound => tracing::warn!(error = %self, "Request rejected"),
            _ => tracing::error!(error = ?self, "Request failed"),
        }

        match self {
            AppError::InvalidCredentials => error_resp(
                StatusCode::UNAUTHORIZED,
                ErrorCode::InvalidCredentials,
                "Unauthorized",
            ),
            AppError::InvalidInput(msg) => {
                error_resp(StatusCode::BAD_REQUEST, ErrorCode::InvalidInput, &msg)
            }
            AppError::NoBillingCustomer => error_resp(
                StatusCode::NOT_FOUND,
                ErrorCode::NoBillingCustomer,
                "No billing customer found for this user",
            ),
            AppError::NotFound => error_resp(StatusCode::NOT_FOUND, ErrorCode::NotFound, "Not found"),
            AppError::Database(_) | AppError::Identity(_) | AppError::PaymentProvider(_) => {
                error_resp(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError,
                    GENERIC_SERVER_ERROR,
                )
            }
        }
    }
}

fn error_resp(status: StatusCode, code: ErrorCode, message: &str) -> Response {
    let body = serde_json::json!({ "code": code.as_str(), "message": message });
    (status, Json(body)).into_response()
}
