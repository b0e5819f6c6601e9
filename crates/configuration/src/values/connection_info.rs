use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Secret;

/// Base URL of the hosted project, e.g. `https://<project>.supabase.co`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ConnectionUrl(pub Secret);

impl From<String> for ConnectionUrl {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for ConnectionUrl {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

/// The access credential sent with every request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ApiKey(pub Secret);

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}
