use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::identity_provider::IdentityProvider,
    domain::entities::{
        auth_user::AuthUser, entitlement::SubscriptionContext, subscription::Subscription,
    },
};

#[async_trait]
pub trait SubscriptionRepo: Send + Sync {
    async fn get_by_user_id(&self, user_id: Uuid) -> AppResult<Option<Subscription>>;
}

#[derive(Clone)]
pub struct SubscriptionUseCases {
    identity: Arc<dyn IdentityProvider>,
    subscription_repo: Arc<dyn SubscriptionRepo>,
}

impl SubscriptionUseCases {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        subscription_repo: Arc<dyn SubscriptionRepo>,
    ) -> Self {
        Self {
            identity,
            subscription_repo,
        }
    }

    /// Resolve the caller behind a bearer credential.
    #[instrument(skip_all)]
    pub async fn authenticate(&self, access_token: &str) -> AppResult<AuthUser> {
        if access_token.trim().is_empty() {
            return Err(AppError::InvalidCredentials);
        }
        let user = self
            .identity
            .get_user(access_token)
            .await?
            .ok_or(AppError::InvalidCredentials)?;
        tracing::debug!(user_id = %user.id, "Authenticated caller");
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn get_subscription(&self, user_id: Uuid) -> AppResult<Option<Subscription>> {
        self.subscription_repo.get_by_user_id(user_id).await
    }

    #[instrument(skip(self))]
    pub async fn context_for_user(&self, user_id: Uuid) -> AppResult<SubscriptionContext> {
        let subscription = self.get_subscription(user_id).await?;
        Ok(SubscriptionContext::from_subscription(subscription))
    }

    /// Authenticate and build the subscription context in one go.
    pub async fn resolve_context(
        &self,
        access_token: &str,
    ) -> AppResult<(AuthUser, SubscriptionContext)> {
        let user = self.authenticate(access_token).await?;
        let ctx = self.context_for_user(user.id).await?;
        Ok((user, ctx))
    }
}
