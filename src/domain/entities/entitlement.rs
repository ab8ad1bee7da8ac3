//! Entitlement gating over a user's subscription.
//!
//! The subscription context is computed once per request and handed to the
//! gate, which only ever looks at the derived flags.

use serde::Serialize;

use crate::domain::entities::subscription::Subscription;

pub const DEFAULT_FALLBACK_PATH: &str = "/dashboard";
pub const DEFAULT_UPGRADE_PATH: &str = "/subscription";

/// Read-only view of a user's subscription as consumed by route guards and the UI.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionContext {
    pub subscription: Option<Subscription>,
    pub is_active: bool,
    pub is_premium: bool,
}

impl SubscriptionContext {
    pub fn from_subscription(subscription: Option<Subscription>) -> Self {
        let is_active = subscription.as_ref().is_some_and(Subscription::is_active);
        let is_premium = subscription.as_ref().is_some_and(Subscription::is_premium);
        Self {
            subscription,
            is_active,
            is_premium,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    /// `replace` means the guarded location must not be kept in navigation history.
    Redirect { to: String, replace: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpgradePrompt {
    pub feature: String,
    pub message: String,
    pub upgrade_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureAccess {
    Granted,
    Denied(UpgradePrompt),
}

#[derive(Debug, Clone)]
pub struct EntitlementGate {
    fallback_path: String,
    upgrade_path: String,
}

impl EntitlementGate {
    pub fn new(fallback_path: impl Into<String>, upgrade_path: impl Into<String>) -> Self {
        Self {
            fallback_path: fallback_path.into(),
            upgrade_path: upgrade_path.into(),
        }
    }

    /// Route guard: active subscribers pass, everyone else is sent to the fallback.
    pub fn decide(&self, ctx: &SubscriptionContext) -> GateDecision {
        if ctx.is_active {
            GateDecision::Allow
        } else {
            GateDecision::Redirect {
                to: self.fallback_path.clone(),
                replace: true,
            }
        }
    }

    /// Premium feature check. Denials carry the prompt shown instead of the feature.
    pub fn feature_access(&self, ctx: &SubscriptionContext, feature: &str) -> FeatureAccess {
        if ctx.is_premium {
            return FeatureAccess::Granted;
        }
        FeatureAccess::Denied(UpgradePrompt {
            feature: feature.to_string(),
            message: format!(
                "{} is available on the Premium plan. Upgrade to unlock it.",
                feature
            ),
            upgrade_path: self.upgrade_path.clone(),
        })
    }
}

impl Default for EntitlementGate {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_PATH, DEFAULT_UPGRADE_PATH)
    }
}
