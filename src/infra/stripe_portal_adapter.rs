use async_trait::async_trait;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::billing_portal::{BillingPortalProvider, CustomerId, PortalSession},
    infra::stripe_client::StripeClient,
};

/// Stripe-hosted customer portal behind the billing portal port.
pub struct StripeBillingPortal {
    stripe: StripeClient,
}

impl StripeBillingPortal {
    pub fn new(stripe: StripeClient) -> Self {
        Self { stripe }
    }
}

#[async_trait]
impl BillingPortalProvider for StripeBillingPortal {
    async fn create_portal_session(
        &self,
        customer_id: &CustomerId,
        return_url: &str,
    ) -> AppResult<PortalSession> {
        let session = self
            .stripe
            .create_portal_session(customer_id.as_str(), return_url)
            .await?;

        if session.url.trim().is_empty() {
            return Err(AppError::PaymentProvider(
                "Stripe portal session missing URL".into(),
            ));
        }

        Ok(PortalSession {
            id: session.id,
            url: session.url,
        })
    }
}
