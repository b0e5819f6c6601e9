//! Name normalization shared by reads and writes. The physical schema is
//! all-lowercase, so every identifier we send is lowercased first.

use indexmap::IndexMap;

use query_engine_metadata::metadata;
use query_engine_request::request::ast;

/// The physical table a request targets.
pub fn resolve_table_name(metadata: &metadata::Metadata, table: &str) -> String {
    metadata.table_mapping.resolve(table)
}

/// A field or column name as the store knows it.
pub fn normalize_identifier(name: &str) -> String {
    name.to_lowercase()
}

/// Lowercase every column of a row. When two columns collide after
/// lowercasing the later value wins, in the position of the first.
pub fn normalize_row(data: IndexMap<String, serde_json::Value>) -> ast::Row {
    let mut row = ast::Row::with_capacity(data.len());
    for (column, value) in data {
        row.insert(normalize_identifier(&column), value);
    }
    row
}
