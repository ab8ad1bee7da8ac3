use async_trait::async_trait;
use crate::app_error::AppResult;

/// Unique identifier for a customer in a payment provider
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomerId(pub String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A provider-hosted billing management session.
#[derive(Debug, Clone)]
pub struct PortalSession {
    pub id: String,
    pub url: String,
}

/// Billing portal port - hosted self-service for payment methods and subscriptions.
#[async_trait]
pub trait BillingPortalProvider: Send + Sync {
    /// Create a portal session scoped to `customer_id`. The user lands back on
    /// `return_url` when leaving the portal.
    async fn create_portal_session(
        &self,
        customer_id: &CustomerId,
        return_url: &str,
    ) -> AppResult<PortalSession>;
}
