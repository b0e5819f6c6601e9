//! Type definitions of a REST request representation.

use indexmap::IndexMap;

/// A single request against one table.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub table: TableName,
    pub action: Action,
    pub select: Option<SelectList>,
    pub filters: Vec<Filter>,
    pub order_by: OrderBy,
    pub limit: Option<u64>,
    pub cardinality: Cardinality,
}

/// What the request does to the table.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Read rows.
    Select,
    /// Insert one row.
    Insert(Row),
    /// Update every row matching the filters.
    Update(Row),
}

/// A row written to the table, keyed by column name in insertion order.
pub type Row = IndexMap<String, serde_json::Value>;

/// A table name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableName(pub String);

/// A column name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnName(pub String);

/// A select list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectList {
    SelectStar,
    Columns(Vec<ColumnName>),
}

/// A single filter on a column. Filters on a request are AND-ed.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: ColumnName,
    pub operator: FilterOperator,
    pub value: Value,
}

/// The filter operators of the REST dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
    CaseInsensitiveLike,
    In,
}

/// An ORDER BY clause
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderBy {
    pub elements: Vec<OrderByElement>,
}

/// A single element in an ORDER BY clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByElement {
    pub column: ColumnName,
    pub direction: OrderByDirection,
}

/// A direction for a single ORDER BY element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderByDirection {
    Asc,
    Desc,
}

/// How many rows the caller expects back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cardinality {
    /// An array of rows.
    #[default]
    Many,
    /// Exactly one row, returned as an object.
    Single,
}

/// An irreducible filter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    List(Vec<Value>),
}

impl std::fmt::Display for TableName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for ColumnName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
