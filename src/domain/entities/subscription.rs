use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::{plan_type::PlanType, subscription_status::SubscriptionStatus};

/// A user's subscription row. Written by the billing system of record,
/// read-only here. At most one row exists per user.
#[derive(Debug, Clone, Serialize)]
pub struct Subscription {
    pub id: Uuid,
    pub user_id: Uuid,
    pub stripe_customer_id: Option<String>,
    pub stripe_subscription_id: Option<String>,
    pub status: SubscriptionStatus,
    pub plan_type: Option<PlanType>,
    pub current_period_end: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Subscription {
    /// Stripe customer id, if one has been stored and is not blank.
    pub fn customer_id(&self) -> Option<&str> {
        self.stripe_customer_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn is_premium(&self) -> bool {
        self.is_active() && self.plan_type.as_ref().is_some_and(PlanType::is_premium)
    }
}
