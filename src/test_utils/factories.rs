//! Test data factories.
//!
//! Each factory returns a complete, valid object. Use the closure parameter to
//! override specific fields.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::entities::{
    auth_user::AuthUser, plan_type::PlanType, subscription::Subscription,
    subscription_status::SubscriptionStatus,
};

/// Create a test user with sensible defaults.
pub fn create_test_user(overrides: impl FnOnce(&mut AuthUser)) -> AuthUser {
    let mut user = AuthUser {
        id: Uuid::new_v4(),
        email: Some("owner@clinic.test".to_string()),
    };
    overrides(&mut user);
    user
}

/// Create an active basic-plan subscription with a Stripe customer attached.
pub fn create_test_subscription(
    user_id: Uuid,
    overrides: impl FnOnce(&mut Subscription),
) -> Subscription {
    let mut subscription = Subscription {
        id: Uuid::new_v4(),
        user_id,
        stripe_customer_id: Some("cus_test_123".to_string()),
        stripe_subscription_id: Some("sub_test_123".to_string()),
        status: SubscriptionStatus::Active,
        plan_type: Some(PlanType::Basic),
        current_period_end: Some(test_datetime()),
        created_at: Some(test_datetime()),
        updated_at: Some(test_datetime()),
    };
    overrides(&mut subscription);
    subscription
}

/// Fixed timestamp so fixtures are reproducible.
pub fn test_datetime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}
