use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::identity_provider::IdentityProvider,
    domain::entities::auth_user::AuthUser,
};

/// Supabase Auth (GoTrue) user lookup.
///
/// The caller's JWT is forwarded as-is; Supabase validates it and returns the
/// user it belongs to.
pub struct SupabaseAuthClient {
    client: Client,
    user_endpoint: String,
    anon_key: SecretString,
}

#[derive(Debug, Deserialize)]
struct SupabaseUser {
    id: Uuid,
    #[serde(default)]
    email: Option<String>,
}

impl SupabaseAuthClient {
    pub fn new(client: Client, project_url: &Url, anon_key: SecretString) -> Self {
        Self {
            client,
            user_endpoint: user_endpoint(project_url),
            anon_key,
        }
    }
}

fn user_endpoint(project_url: &Url) -> String {
    format!("{}/auth/v1/user", project_url.as_str().trim_end_matches('/'))
}

#[async_trait]
impl IdentityProvider for SupabaseAuthClient {
    async fn get_user(&self, access_token: &str) -> AppResult<Option<AuthUser>> {
        let response = self
            .client
            .get(&self.user_endpoint)
            .bearer_auth(access_token)
            .header("apikey", self.anon_key.expose_secret())
            .send()
            .await
            .map_err(|e| AppError::Identity(format!("Supabase auth request failed: {}", e)))?;

        let status = response.status();
        match status {
            StatusCode::BAD_REQUEST
            | StatusCode::UNAUTHORIZED
            | StatusCode::FORBIDDEN
            | StatusCode::NOT_FOUND => {
                tracing::debug!(status = %status, "Supabase rejected access token");
                return Ok(None);
            }
            s if !s.is_success() => {
                return Err(AppError::Identity(format!(
                    "Supabase auth returned {}",
                    status
                )));
            }
            _ => {}
        }

        let user: SupabaseUser = response
            .json()
            .await
            .map_err(|e| AppError::Identity(format!("Failed to parse Supabase user: {}", e)))?;

        Ok(Some(AuthUser {
            id: user.id,
            email: user.email,
        }))
    }
}
