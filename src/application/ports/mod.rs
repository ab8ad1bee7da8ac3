pub mod billing_portal;
pub mod identity_provider;
