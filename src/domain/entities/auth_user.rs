use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity resolved from a bearer credential by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}
