use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Lifecycle state of a subscription row, as written by the billing system of record.
///
/// Stripe's own statuses are accepted verbatim; `inactive` covers rows that were
/// never activated or were explicitly switched off.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SubscriptionStatus {
    Active,
    Inactive,
    Trialing,
    PastDue,
    #[strum(to_string = "canceled", serialize = "cancelled")]
    Canceled,
    Incomplete,
    IncompleteExpired,
    Unpaid,
    Paused,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Parse a stored status. Unknown values never grant access.
    pub fn parse_lossy(s: &str) -> Self {
        s.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(status = %s, "Unknown subscription status, treating as inactive");
            SubscriptionStatus::Inactive
        })
    }

    /// Returns true if the user should have access to subscription features
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            SubscriptionStatus::Active | SubscriptionStatus::Trialing
        )
    }
}

impl Default for SubscriptionStatus {
    fn default() -> Self {
        SubscriptionStatus::Inactive
    }
}
