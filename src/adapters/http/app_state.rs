use std::sync::Arc;

use crate::{
    application::use_cases::{
        billing_portal::BillingPortalUseCases, subscription::SubscriptionUseCases,
    },
    domain::entities::entitlement::EntitlementGate,
    infra::config::AppConfig,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub subscription_use_cases: Arc<SubscriptionUseCases>,
    pub billing_portal_use_cases: Arc<BillingPortalUseCases>,
    pub entitlement_gate: Arc<EntitlementGate>,
}
