//! Metadata information regarding the hosted database and how legacy names map onto it.

pub mod database;
pub mod tables;

// re-export without modules
pub use database::*;
pub use tables::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Metadata information.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Additional legacy table names, merged over the built-in ones.
    #[serde(default)]
    #[serde(skip_serializing_if = "TableMapping::is_empty")]
    pub table_mapping: TableMapping,
}

impl Metadata {
    pub fn empty() -> Self {
        Metadata {
            table_mapping: TableMapping::empty(),
        }
    }

    /// The metadata used at runtime: the built-in legacy table names, with
    /// any configured entries layered on top.
    pub fn with_legacy_tables(self) -> Self {
        Metadata {
            table_mapping: TableMapping::legacy().merge(self.table_mapping),
        }
    }
}
