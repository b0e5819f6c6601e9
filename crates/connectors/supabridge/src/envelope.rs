//! The uniform result of every operation.

use serde::{Deserialize, Serialize};

/// `{success, data?, error?, insertId?}`. Absent members are not serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_id: Option<serde_json::Value>,
}

impl ResultEnvelope {
    pub fn rows(data: serde_json::Value) -> Self {
        ResultEnvelope {
            success: true,
            data: Some(data),
            error: None,
            insert_id: None,
        }
    }

    pub fn inserted(insert_id: serde_json::Value, row: serde_json::Value) -> Self {
        ResultEnvelope {
            success: true,
            data: Some(row),
            error: None,
            insert_id: Some(insert_id),
        }
    }

    pub fn updated() -> Self {
        ResultEnvelope {
            success: true,
            data: None,
            error: None,
            insert_id: None,
        }
    }

    pub fn failure(error: impl std::fmt::Display) -> Self {
        ResultEnvelope {
            success: false,
            data: None,
            error: Some(error.to_string()),
            insert_id: None,
        }
    }
}
