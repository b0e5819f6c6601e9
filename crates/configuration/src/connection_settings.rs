//! Database connection settings.

use crate::values::{ApiKey, ConnectionUrl, Secret, Variable};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_URL_VARIABLE: &str = "SUPABRIDGE_URL";
pub const DEFAULT_API_KEY_VARIABLE: &str = "SUPABRIDGE_API_KEY";

/// Database connection settings.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConnectionSettings {
    /// Base URL of the hosted project.
    pub url: ConnectionUrl,
    /// Key sent as both `apikey` and bearer token.
    pub api_key: ApiKey,
    /// Schema to read and write, when not the service default.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

impl DatabaseConnectionSettings {
    pub fn empty() -> Self {
        Self {
            url: ConnectionUrl(Secret::FromEnvironment(Variable::from(DEFAULT_URL_VARIABLE))),
            api_key: ApiKey(Secret::FromEnvironment(Variable::from(
                DEFAULT_API_KEY_VARIABLE,
            ))),
            schema: None,
        }
    }
}
