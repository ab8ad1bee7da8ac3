use serde::{Serialize, Serializer};

/// Plan tier attached to a subscription.
///
/// Plan names are owned by the billing provider, so anything other than the
/// two known tiers is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanType {
    Basic,
    Premium,
    Other(String),
}

impl PlanType {
    /// Returns `None` for missing or blank plan names.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let plan = match trimmed.to_ascii_lowercase().as_str() {
            "basic" => PlanType::Basic,
            "premium" => PlanType::Premium,
            _ => PlanType::Other(trimmed.to_string()),
        };
        Some(plan)
    }

    pub fn as_str(&self) -> &str {
        match self {
            PlanType::Basic => "basic",
            PlanType::Premium => "premium",
            PlanType::Other(name) => name,
        }
    }

    pub fn is_premium(&self) -> bool {
        matches!(self, PlanType::Premium)
    }
}

impl std::fmt::Display for PlanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PlanType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
