//! Helpers for building requests fluently.
//!
//! ```
//! use query_engine_request::request::{ast, helpers};
//!
//! let request = helpers::from_table("member")
//!     .select(ast::SelectList::SelectStar)
//!     .gt("age", ast::Value::Number(18.into()))
//!     .order("name", true)
//!     .limit(10);
//!
//! assert_eq!(request.filters.len(), 1);
//! ```

use super::ast::*;

/// Start a read request against a table.
pub fn from_table(table: impl Into<String>) -> Request {
    Request {
        table: TableName(table.into()),
        action: Action::Select,
        select: None,
        filters: vec![],
        order_by: OrderBy::default(),
        limit: None,
        cardinality: Cardinality::Many,
    }
}

/// Select every column.
pub fn star_select() -> SelectList {
    SelectList::SelectStar
}

/// Select the given columns, in order.
pub fn columns_select<I, S>(columns: I) -> SelectList
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    SelectList::Columns(
        columns
            .into_iter()
            .map(|column| ColumnName(column.into()))
            .collect(),
    )
}

impl Request {
    /// Choose the columns to return. For writes this asks the service to
    /// return the written rows.
    #[must_use]
    pub fn select(mut self, select_list: SelectList) -> Self {
        self.select = Some(select_list);
        self
    }

    /// Add a filter. Filters accumulate and are AND-ed.
    #[must_use]
    pub fn filter(
        mut self,
        column: impl Into<String>,
        operator: FilterOperator,
        value: Value,
    ) -> Self {
        self.filters.push(Filter {
            column: ColumnName(column.into()),
            operator,
            value,
        });
        self
    }

    #[must_use]
    pub fn eq(self, column: impl Into<String>, value: Value) -> Self {
        self.filter(column, FilterOperator::Equals, value)
    }

    #[must_use]
    pub fn neq(self, column: impl Into<String>, value: Value) -> Self {
        self.filter(column, FilterOperator::NotEquals, value)
    }

    #[must_use]
    pub fn gt(self, column: impl Into<String>, value: Value) -> Self {
        self.filter(column, FilterOperator::GreaterThan, value)
    }

    #[must_use]
    pub fn gte(self, column: impl Into<String>, value: Value) -> Self {
        self.filter(column, FilterOperator::GreaterThanOrEqualTo, value)
    }

    #[must_use]
    pub fn lt(self, column: impl Into<String>, value: Value) -> Self {
        self.filter(column, FilterOperator::LessThan, value)
    }

    #[must_use]
    pub fn lte(self, column: impl Into<String>, value: Value) -> Self {
        self.filter(column, FilterOperator::LessThanOrEqualTo, value)
    }

    /// Case-insensitive pattern match.
    #[must_use]
    pub fn ilike(self, column: impl Into<String>, pattern: Value) -> Self {
        self.filter(column, FilterOperator::CaseInsensitiveLike, pattern)
    }

    /// Membership in a list of values.
    #[must_use]
    pub fn in_(self, column: impl Into<String>, values: Vec<Value>) -> Self {
        self.filter(column, FilterOperator::In, Value::List(values))
    }

    /// Append an ORDER BY element after any existing ones.
    #[must_use]
    pub fn order(mut self, column: impl Into<String>, ascending: bool) -> Self {
        self.order_by.elements.push(OrderByElement {
            column: ColumnName(column.into()),
            direction: if ascending {
                OrderByDirection::Asc
            } else {
                OrderByDirection::Desc
            },
        });
        self
    }

    /// Cap the number of rows returned.
    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Turn this into a single-row insert.
    #[must_use]
    pub fn insert(mut self, row: Row) -> Self {
        self.action = Action::Insert(row);
        self
    }

    /// Turn this into an update of every matching row.
    #[must_use]
    pub fn update(mut self, row: Row) -> Self {
        self.action = Action::Update(row);
        self
    }

    /// Expect exactly one row back, as an object rather than an array.
    #[must_use]
    pub fn single(mut self) -> Self {
        self.cardinality = Cardinality::Single;
        self
    }
}
