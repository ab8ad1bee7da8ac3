pub mod auth_user;
pub mod entitlement;
pub mod plan_type;
pub mod stripe_mode;
pub mod subscription;
pub mod subscription_status;
