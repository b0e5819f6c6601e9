//! Translate an `InsertRequest` into a single-row insert.

use query_engine_metadata::metadata;
use query_engine_request::request::{ast, helpers};

use crate::translation::helpers::{normalize_row, resolve_table_name};
use crate::translation::models;

/// Columns that identify a freshly inserted row, in the order they are tried.
pub const INSERT_ID_COLUMNS: [&str; 5] = [
    "branch_id",
    "manager_contract_id",
    "pro_contract_id",
    "member_id",
    "id",
];

/// Translate an insert. The inserted row is asked back as a single object.
pub fn translate(
    metadata: &metadata::Metadata,
    insert_request: models::InsertRequest,
) -> ast::Request {
    let table_name = resolve_table_name(metadata, &insert_request.table);

    helpers::from_table(table_name)
        .insert(normalize_row(insert_request.data))
        .select(helpers::star_select())
        .single()
}

/// Best-effort identifier of an inserted row: the first truthy value among
/// the known identifier columns, or `"unknown"`.
pub fn insert_id(row: &serde_json::Value) -> serde_json::Value {
    INSERT_ID_COLUMNS
        .iter()
        .filter_map(|column| row.get(column))
        .find(|value| is_truthy(value))
        .cloned()
        .unwrap_or_else(|| serde_json::Value::String("unknown".to_string()))
}

/// `null`, `false`, zero and the empty string do not identify a row.
fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0 && !n.is_nan()),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_is_used_when_it_is_the_only_identifier() {
        assert_eq!(insert_id(&json!({ "name": "alice", "id": 5 })), json!(5));
    }

    #[test]
    fn identifiers_are_tried_in_priority_order() {
        let row = json!({ "id": 9, "member_id": "m-1", "branch_id": 3 });
        assert_eq!(insert_id(&row), json!(3));

        let row = json!({ "id": 9, "pro_contract_id": 12 });
        assert_eq!(insert_id(&row), json!(12));
    }

    #[test]
    fn falsy_identifiers_are_skipped() {
        let row = json!({ "branch_id": null, "manager_contract_id": 0, "member_id": "", "id": 4 });
        assert_eq!(insert_id(&row), json!(4));
    }

    #[test]
    fn rows_without_identifiers_are_unknown() {
        assert_eq!(insert_id(&json!({ "name": "alice" })), json!("unknown"));
        assert_eq!(insert_id(&json!(null)), json!("unknown"));
    }
}
