//! The request shapes callers send, in SQL vocabulary.

use indexmap::IndexMap;
use serde::Deserialize;

/// A read request.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub table: String,
    /// Columns to return. Absent, empty, or containing `*` means all columns.
    #[serde(default)]
    pub fields: Option<Vec<String>>,
    #[serde(default, rename = "where")]
    pub where_: Option<Vec<WhereCondition>>,
    /// Takes precedence over `order` when present, even when empty.
    #[serde(default)]
    pub order_by: Option<SingleOrList<OrderSpec>>,
    #[serde(default)]
    pub order: Option<OrderSpec>,
    /// Row cap. Zero means no cap.
    #[serde(default)]
    pub limit: Option<u64>,
}

/// A single-row insert.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InsertRequest {
    pub table: String,
    pub data: IndexMap<String, serde_json::Value>,
}

/// An update of every row matching all conditions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateRequest {
    pub table: String,
    pub data: IndexMap<String, serde_json::Value>,
    #[serde(default, rename = "where")]
    pub where_: Vec<WhereCondition>,
}

/// One predicate of a WHERE clause.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WhereCondition {
    pub field: String,
    pub operator: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// One element of an ORDER BY clause.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderSpec {
    pub field: String,
    #[serde(default)]
    pub direction: OrderDirection,
}

/// Sort direction. `ASC` in any case is ascending; any other spelling sorts
/// descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl From<String> for OrderDirection {
    fn from(direction: String) -> Self {
        if direction.eq_ignore_ascii_case("ASC") {
            OrderDirection::Asc
        } else {
            OrderDirection::Desc
        }
    }
}

/// Type that accept both a single value and a list of values. Allows for a simpler format when a
/// single value is the common case.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SingleOrList<T> {
    Single(T),
    List(Vec<T>),
}

impl<T> SingleOrList<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            SingleOrList::Single(item) => vec![item],
            SingleOrList::List(items) => items,
        }
    }
}

impl QueryRequest {
    /// The ORDER BY elements in application order.
    pub fn order_specs(&self) -> Vec<OrderSpec> {
        match (&self.order_by, &self.order) {
            (Some(order_by), _) => order_by.clone().into_vec(),
            (None, Some(order)) => vec![order.clone()],
            (None, None) => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_by_accepts_a_single_spec() {
        let request: QueryRequest = serde_json::from_value(json!({
            "table": "member",
            "orderBy": { "field": "Name", "direction": "DESC" }
        }))
        .unwrap();

        assert_eq!(
            request.order_specs(),
            vec![OrderSpec {
                field: "Name".into(),
                direction: OrderDirection::Desc,
            }]
        );
    }

    #[test]
    fn order_by_wins_over_order_even_when_empty() {
        let request: QueryRequest = serde_json::from_value(json!({
            "table": "member",
            "orderBy": [],
            "order": { "field": "name" }
        }))
        .unwrap();

        assert!(request.order_specs().is_empty());
    }

    #[test]
    fn order_is_used_without_order_by() {
        let request: QueryRequest = serde_json::from_value(json!({
            "table": "member",
            "order": { "field": "name" }
        }))
        .unwrap();

        assert_eq!(
            request.order_specs(),
            vec![OrderSpec {
                field: "name".into(),
                direction: OrderDirection::Asc,
            }]
        );
    }

    #[test]
    fn directions_other_than_asc_sort_descending() {
        let direction = |s: &str| OrderDirection::from(s.to_string());
        assert_eq!(direction("asc"), OrderDirection::Asc);
        assert_eq!(direction("ASC"), OrderDirection::Asc);
        assert_eq!(direction("desc"), OrderDirection::Desc);
        assert_eq!(direction("sideways"), OrderDirection::Desc);
    }

    #[test]
    fn insert_data_keeps_caller_column_order() {
        let request: InsertRequest = serde_json::from_str(
            r#"{ "table": "member", "data": { "Name": "Alice", "id": 5, "Age": 30 } }"#,
        )
        .unwrap();

        let columns: Vec<&str> = request.data.keys().map(String::as_str).collect();
        assert_eq!(columns, vec!["Name", "id", "Age"]);
    }
}
