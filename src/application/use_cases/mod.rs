pub mod billing_portal;
pub mod subscription;
