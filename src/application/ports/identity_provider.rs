use async_trait::async_trait;

use crate::{app_error::AppResult, domain::entities::auth_user::AuthUser};

/// Resolves bearer credentials issued by the auth provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// `Ok(None)` means the credential was rejected; errors are reserved for
    /// the provider being unreachable or answering garbage.
    async fn get_user(&self, access_token: &str) -> AppResult<Option<AuthUser>>;
}
