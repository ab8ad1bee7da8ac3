use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::app_error::{AppError, AppResult};

pub const STRIPE_API_BASE: &str = "https://api.stripe.com/v1";

pub struct StripeClient {
    client: Client,
    secret_key: SecretString,
    api_base: String,
}

impl StripeClient {
    pub fn new(client: Client, secret_key: SecretString, api_base: impl Into<String>) -> Self {
        Self {
            client,
            secret_key,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    fn auth_header(&self) -> String {
        use base64::Engine;
        let encoded = base64::engine::general_purpose::STANDARD
            .encode(format!("{}:", self.secret_key.expose_secret()));
        format!("Basic {}", encoded)
    }

    // ========================================================================
    // Customer Portal
    // ========================================================================

    pub async fn create_portal_session(
        &self,
        customer_id: &str,
        return_url: &str,
    ) -> AppResult<StripePortalSession> {
        let params = [("customer", customer_id), ("return_url", return_url)];

        let response = self
            .client
            .post(format!("{}/billing_portal/sessions", self.api_base))
            .header("Authorization", self.auth_header())
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::PaymentProvider(format!("Stripe request failed: {}", e)))?;

        self.handle_response(response).await
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> AppResult<T> {
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::PaymentProvider(format!("Failed to read Stripe response: {}", e))
        })?;

        if !status.is_success() {
            tracing::error!(status = %status, "Stripe API error");
            return Err(stripe_error(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, "Failed to parse Stripe response");
            AppError::PaymentProvider(format!("Failed to parse Stripe response: {}", e))
        })
    }
}

/// Map a non-2xx Stripe answer to an error. Stripe's own message is kept for
/// the logs; callers only ever see a generic failure.
fn stripe_error(status: StatusCode, body: &str) -> AppError {
    match serde_json::from_str::<StripeErrorResponse>(body) {
        Ok(error) => AppError::PaymentProvider(format!(
            "Stripe error ({}): {}",
            status,
            error.error.message.unwrap_or(error.error.error_type)
        )),
        Err(_) => AppError::PaymentProvider(format!("Stripe API error: {} - {}", status, body)),
    }
}

// ============================================================================
// Stripe Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct StripePortalSession {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct StripeErrorResponse {
    pub error: StripeError,
}

#[derive(Debug, Deserialize)]
pub struct StripeError {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: Option<String>,
}
