//! Legacy table names and the physical tables they now live in.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Legacy table identifiers that were renamed when the schema moved to its
/// current layout. Keys are matched case-sensitively.
const LEGACY_TABLES: [(&str, &str); 4] = [
    ("board", "v2_board"),
    ("Board", "v2_board"),
    ("staff", "v2_staff_pro"),
    ("Staff", "v2_staff_pro"),
];

/// Mapping from a requested table identifier to the physical table name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct TableMapping(pub BTreeMap<String, String>);

impl TableMapping {
    pub fn empty() -> Self {
        TableMapping(BTreeMap::new())
    }

    /// The built-in legacy mapping.
    pub fn legacy() -> Self {
        TableMapping(
            LEGACY_TABLES
                .iter()
                .map(|(legacy, current)| ((*legacy).to_string(), (*current).to_string()))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Layer `other` over this mapping. Entries in `other` win.
    #[must_use]
    pub fn merge(mut self, other: TableMapping) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Exact-string lookup of a requested identifier.
    pub fn get(&self, table: &str) -> Option<&str> {
        self.0.get(table).map(String::as_str)
    }

    /// The physical name for a requested table: the mapped name if there is
    /// one, the identifier itself otherwise, lowercased either way.
    pub fn resolve(&self, table: &str) -> String {
        self.get(table).unwrap_or(table).to_lowercase()
    }
}
