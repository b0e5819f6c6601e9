//! Convert a request into its wire form: method, path, query parameters,
//! preference headers and body.

use super::ast::*;

/// Media type asking for a single object instead of an array.
pub const SINGLE_OBJECT_MEDIA_TYPE: &str = "application/vnd.pgrst.object+json";

/// HTTP methods used by the REST dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

/// A request in wire form. The path is relative to the REST root.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub prefer: Option<&'static str>,
    pub accept: Option<&'static str>,
    pub body: Option<Row>,
}

impl RenderedRequest {
    /// The query string, unencoded. Useful for logs and tests.
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl Request {
    pub fn render(&self) -> RenderedRequest {
        let mut query = vec![];

        // reads always carry a select list; writes only when they want rows back
        match (&self.action, &self.select) {
            (_, Some(select_list)) => query.push(("select".to_string(), select_list.to_param())),
            (Action::Select, None) => {
                query.push(("select".to_string(), SelectList::SelectStar.to_param()));
            }
            (Action::Insert(_) | Action::Update(_), None) => {}
        }

        for filter in &self.filters {
            query.push((filter.column.0.clone(), filter.to_param()));
        }

        if let Some(order) = self.order_by.to_param() {
            query.push(("order".to_string(), order));
        }

        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }

        let (method, body) = match &self.action {
            Action::Select => (Method::Get, None),
            Action::Insert(row) => (Method::Post, Some(row.clone())),
            Action::Update(row) => (Method::Patch, Some(row.clone())),
        };

        let prefer = match (&self.action, &self.select) {
            (Action::Select, _) => None,
            (_, Some(_)) => Some("return=representation"),
            (_, None) => Some("return=minimal"),
        };

        let accept = match self.cardinality {
            Cardinality::Single => Some(SINGLE_OBJECT_MEDIA_TYPE),
            Cardinality::Many => None,
        };

        RenderedRequest {
            method,
            path: self.table.0.clone(),
            query,
            prefer,
            accept,
            body,
        }
    }
}

impl SelectList {
    pub fn to_param(&self) -> String {
        match self {
            SelectList::SelectStar => "*".to_string(),
            SelectList::Columns(columns) => columns
                .iter()
                .map(|column| column.0.as_str())
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl FilterOperator {
    /// The operator keyword of the REST dialect.
    pub fn keyword(self) -> &'static str {
        match self {
            FilterOperator::Equals => "eq",
            FilterOperator::NotEquals => "neq",
            FilterOperator::GreaterThan => "gt",
            FilterOperator::GreaterThanOrEqualTo => "gte",
            FilterOperator::LessThan => "lt",
            FilterOperator::LessThanOrEqualTo => "lte",
            FilterOperator::CaseInsensitiveLike => "ilike",
            FilterOperator::In => "in",
        }
    }
}

impl Filter {
    pub fn to_param(&self) -> String {
        let value = match (self.operator, &self.value) {
            (FilterOperator::In, Value::List(values)) => format!(
                "({})",
                values
                    .iter()
                    .map(Value::to_list_item)
                    .collect::<Vec<_>>()
                    .join(",")
            ),
            (FilterOperator::In, value) => format!("({})", value.to_list_item()),
            (_, value) => value.to_param(),
        };
        format!("{}.{}", self.operator.keyword(), value)
    }
}

impl OrderBy {
    /// All elements in one `order` parameter, primary first.
    pub fn to_param(&self) -> Option<String> {
        if self.elements.is_empty() {
            None
        } else {
            Some(
                self.elements
                    .iter()
                    .map(|element| {
                        format!(
                            "{}.{}",
                            element.column.0,
                            match element.direction {
                                OrderByDirection::Asc => "asc",
                                OrderByDirection::Desc => "desc",
                            }
                        )
                    })
                    .collect::<Vec<_>>()
                    .join(","),
            )
        }
    }
}

impl Value {
    /// A value in a plain filter. Lists are flattened comma-separated.
    pub fn to_param(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::List(values) => values
                .iter()
                .map(Value::to_param)
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// A value inside an `in.(...)` list. Strings containing list syntax
    /// are double-quoted.
    fn to_list_item(&self) -> String {
        match self {
            Value::String(s) if s.contains(&[',', '(', ')'][..]) => format!("\"{s}\""),
            other => other.to_param(),
        }
    }
}
