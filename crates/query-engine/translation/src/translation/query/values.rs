//! Handle the translation of literal values.

use crate::translation::error::Error;
use query_engine_request::request::ast;

/// Convert a JSON value into a filter value. Lists may only hold scalars.
pub fn translate_json_value(field: &str, value: &serde_json::Value) -> Result<ast::Value, Error> {
    match value {
        serde_json::Value::Array(items) => items
            .iter()
            .map(|item| match item {
                serde_json::Value::Array(_) => Err(not_supported(field, "nested lists")),
                scalar => translate_scalar(field, scalar),
            })
            .collect::<Result<Vec<_>, Error>>()
            .map(ast::Value::List),
        scalar => translate_scalar(field, scalar),
    }
}

fn translate_scalar(field: &str, value: &serde_json::Value) -> Result<ast::Value, Error> {
    match value {
        serde_json::Value::Null => Ok(ast::Value::Null),
        serde_json::Value::Bool(b) => Ok(ast::Value::Bool(*b)),
        serde_json::Value::Number(n) => Ok(ast::Value::Number(n.clone())),
        serde_json::Value::String(s) => Ok(ast::Value::String(s.clone())),
        serde_json::Value::Array(_) => Err(not_supported(field, "lists")),
        serde_json::Value::Object(_) => Err(not_supported(field, "objects")),
    }
}

fn not_supported(field: &str, thing: &str) -> Error {
    Error::ValueNotSupported {
        field: field.to_string(),
        thing: thing.to_string(),
    }
}
