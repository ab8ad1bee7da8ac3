/// Which Stripe environment a secret key talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripeMode {
    Test,
    Live,
}

impl StripeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StripeMode::Test => "test",
            StripeMode::Live => "live",
        }
    }

    /// Detect the mode from a secret or restricted key prefix.
    /// Returns `None` when the key is not a Stripe server-side key at all.
    pub fn from_secret_key(key: &str) -> Option<Self> {
        if key.starts_with("sk_live_") || key.starts_with("rk_live_") {
            Some(StripeMode::Live)
        } else if key.starts_with("sk_test_") || key.starts_with("rk_test_") {
            Some(StripeMode::Test)
        } else {
            None
        }
    }
}

impl std::fmt::Display for StripeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
