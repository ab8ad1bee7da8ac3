use std::sync::Arc;

use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::{
        ports::billing_portal::{BillingPortalProvider, CustomerId, PortalSession},
        use_cases::subscription::SubscriptionUseCases,
        validators::is_valid_return_url,
    },
};

/// Authenticate the caller, find their billing customer and hand off to the
/// payment provider's hosted portal.
#[derive(Clone)]
pub struct BillingPortalUseCases {
    subscriptions: Arc<SubscriptionUseCases>,
    portal: Arc<dyn BillingPortalProvider>,
}

impl BillingPortalUseCases {
    pub fn new(
        subscriptions: Arc<SubscriptionUseCases>,
        portal: Arc<dyn BillingPortalProvider>,
    ) -> Self {
        Self {
            subscriptions,
            portal,
        }
    }

    /// Checks run in a fixed order: credential, body, stored customer, provider.
    #[instrument(skip(self, access_token))]
    pub async fn create_portal_session(
        &self,
        access_token: &str,
        return_url: Option<&str>,
    ) -> AppResult<PortalSession> {
        let user = self.subscriptions.authenticate(access_token).await?;

        let return_url = match return_url.map(str::trim) {
            None | Some("") => {
                return Err(AppError::InvalidInput("return_url is required".into()));
            }
            Some(url) if !is_valid_return_url(url) => {
                return Err(AppError::InvalidInput(
                    "return_url must be an absolute http(s) URL".into(),
                ));
            }
            Some(url) => url,
        };

        let subscription = self.subscriptions.get_subscription(user.id).await?;
        let customer_id = subscription
            .as_ref()
            .and_then(|s| s.customer_id())
            .map(CustomerId::new)
            .ok_or(AppError::NoBillingCustomer)?;

        let session = self
            .portal
            .create_portal_session(&customer_id, return_url)
            .await?;

        tracing::info!(
            user_id = %user.id,
            customer_id = %customer_id,
            session_id = %session.id,
            "Created billing portal session"
        );

        Ok(session)
    }
}
