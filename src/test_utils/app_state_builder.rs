//! Test app state builder for HTTP-level tests.
//!
//! `TestAppStateBuilder` wires the real use cases to in-memory ports.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;
use url::Url;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::{
        billing_portal::BillingPortalUseCases, subscription::SubscriptionUseCases,
    },
    domain::entities::{
        auth_user::AuthUser,
        entitlement::{DEFAULT_FALLBACK_PATH, DEFAULT_UPGRADE_PATH, EntitlementGate},
        subscription::Subscription,
    },
    infra::{config::AppConfig, stripe_client::STRIPE_API_BASE},
    test_utils::{InMemorySubscriptionRepo, RecordingBillingPortal, StaticIdentityProvider},
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let user = create_test_user(|_| {});
/// let sub = create_test_subscription(user.id, |s| s.plan_type = Some(PlanType::Premium));
///
/// let app_state = TestAppStateBuilder::new()
///     .with_user("token", user)
///     .with_subscription(sub)
///     .build();
/// ```
pub struct TestAppStateBuilder {
    users: Vec<(String, AuthUser)>,
    subscriptions: Vec<Subscription>,
    contact_phone: Option<String>,
    enable_debug_routes: bool,
    fallback_path: String,
    cors_origins: Vec<HeaderValue>,
    failing_portal: bool,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            users: vec![],
            subscriptions: vec![],
            contact_phone: None,
            enable_debug_routes: false,
            fallback_path: DEFAULT_FALLBACK_PATH.to_string(),
            cors_origins: vec![],
            failing_portal: false,
        }
    }

    /// Register a user reachable through `Authorization: Bearer <token>`.
    pub fn with_user(mut self, token: &str, user: AuthUser) -> Self {
        self.users.push((token.to_string(), user));
        self
    }

    pub fn with_subscription(mut self, subscription: Subscription) -> Self {
        self.subscriptions.push(subscription);
        self
    }

    pub fn with_contact_phone(mut self, phone: &str) -> Self {
        self.contact_phone = Some(phone.to_string());
        self
    }

    pub fn with_debug_routes(mut self, enabled: bool) -> Self {
        self.enable_debug_routes = enabled;
        self
    }

    pub fn with_fallback_path(mut self, path: &str) -> Self {
        self.fallback_path = path.to_string();
        self
    }

    pub fn with_cors_origin(mut self, origin: &'static str) -> Self {
        self.cors_origins.push(HeaderValue::from_static(origin));
        self
    }

    /// Make every portal request fail like a Stripe API error.
    pub fn with_failing_portal(mut self) -> Self {
        self.failing_portal = true;
        self
    }

    /// Build the AppState and return the portal mock for assertions.
    pub fn build_with_portal_mock(self) -> (AppState, Arc<RecordingBillingPortal>) {
        let portal = Arc::new(if self.failing_portal {
            RecordingBillingPortal::failing()
        } else {
            RecordingBillingPortal::new()
        });
        let app_state = self.build_with_portal(portal.clone());
        (app_state, portal)
    }

    pub fn build(self) -> AppState {
        self.build_with_portal_mock().0
    }

    fn build_with_portal(self, portal: Arc<RecordingBillingPortal>) -> AppState {
        let identity = self
            .users
            .into_iter()
            .fold(StaticIdentityProvider::new(), |identity, (token, user)| {
                identity.with_user(&token, user)
            });
        let subscription_repo = InMemorySubscriptionRepo::with_subscriptions(self.subscriptions);

        let subscription_use_cases = Arc::new(SubscriptionUseCases::new(
            Arc::new(identity),
            Arc::new(subscription_repo),
        ));
        let billing_portal_use_cases = Arc::new(BillingPortalUseCases::new(
            subscription_use_cases.clone(),
            portal,
        ));

        let config = Arc::new(AppConfig {
            stripe_secret_key: SecretString::new("sk_test_dummy".into()),
            stripe_api_base: STRIPE_API_BASE.to_string(),
            supabase_url: Url::parse("http://localhost:54321").unwrap(),
            supabase_anon_key: SecretString::new("anon_test_key".into()),
            database_url: String::new(),
            bind_addr: "127.0.0.1:3001".parse::<SocketAddr>().unwrap(),
            cors_origins: self.cors_origins,
            contact_phone: self.contact_phone,
            premium_fallback_path: self.fallback_path.clone(),
            upgrade_path: DEFAULT_UPGRADE_PATH.to_string(),
            enable_debug_routes: self.enable_debug_routes,
            log_json_file: None,
        });

        let entitlement_gate = Arc::new(EntitlementGate::new(
            self.fallback_path,
            DEFAULT_UPGRADE_PATH,
        ));

        AppState {
            config,
            subscription_use_cases,
            billing_portal_use_cases,
            entitlement_gate,
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
