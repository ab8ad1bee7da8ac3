//! In-memory port implementations.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::{
        ports::{
            billing_portal::{BillingPortalProvider, CustomerId, PortalSession},
            identity_provider::IdentityProvider,
        },
        use_cases::subscription::SubscriptionRepo,
    },
    domain::entities::{auth_user::AuthUser, subscription::Subscription},
};

// ============================================================================
// StaticIdentityProvider
// ============================================================================

/// Accepts a fixed set of tokens; everything else is rejected.
#[derive(Default)]
pub struct StaticIdentityProvider {
    pub users: Mutex<HashMap<String, AuthUser>>,
}

impl StaticIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, token: &str, user: AuthUser) -> Self {
        self.users.lock().unwrap().insert(token.to_string(), user);
        self
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn get_user(&self, access_token: &str) -> AppResult<Option<AuthUser>> {
        Ok(self.users.lock().unwrap().get(access_token).cloned())
    }
}

// ============================================================================
// InMemorySubscriptionRepo
// ============================================================================

#[derive(Default)]
pub struct InMemorySubscriptionRepo {
    pub subscriptions: Mutex<HashMap<Uuid, Subscription>>,
    pub fail: bool,
}

impl InMemorySubscriptionRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subscriptions(subscriptions: Vec<Subscription>) -> Self {
        let map = subscriptions
            .into_iter()
            .map(|s| (s.user_id, s))
            .collect();
        Self {
            subscriptions: Mutex::new(map),
            fail: false,
        }
    }

    /// Every lookup fails as if the database were down.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl SubscriptionRepo for InMemorySubscriptionRepo {
    async fn get_by_user_id(&self, user_id: Uuid) -> AppResult<Option<Subscription>> {
        if self.fail {
            return Err(AppError::Database("connection refused".into()));
        }
        Ok(self.subscriptions.lock().unwrap().get(&user_id).cloned())
    }
}

// ============================================================================
// RecordingBillingPortal
// ============================================================================

/// Records portal requests and hands back a deterministic session URL.
#[derive(Default)]
pub struct RecordingBillingPortal {
    pub requests: Mutex<Vec<(CustomerId, String)>>,
    pub fail: bool,
}

impl RecordingBillingPortal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(CustomerId, String)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl BillingPortalProvider for RecordingBillingPortal {
    async fn create_portal_session(
        &self,
        customer_id: &CustomerId,
        return_url: &str,
    ) -> AppResult<PortalSession> {
        self.requests
            .lock()
            .unwrap()
            .push((customer_id.clone(), return_url.to_string()));

        if self.fail {
            return Err(AppError::PaymentProvider(
                "No such customer: 'cus_test_123'".into(),
            ));
        }

        Ok(PortalSession {
            id: format!("bps_{}", customer_id),
            url: format!("https://billing.test/p/session/{}", customer_id),
        })
    }
}
