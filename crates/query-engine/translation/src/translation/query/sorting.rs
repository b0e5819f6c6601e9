//! Handle ORDER BY translation.

use query_engine_request::request::ast;

use crate::translation::helpers::normalize_identifier;
use crate::translation::models::{OrderDirection, OrderSpec};

/// Append one ORDER BY element per spec, primary first.
pub fn translate_order_by(request: ast::Request, order_specs: &[OrderSpec]) -> ast::Request {
    order_specs.iter().fold(request, |request, spec| {
        request.order(
            normalize_identifier(&spec.field),
            spec.direction == OrderDirection::Asc,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use query_engine_request::request::helpers;

    #[test]
    fn missing_direction_sorts_ascending() {
        let request = translate_order_by(
            helpers::from_table("member"),
            &[OrderSpec {
                field: "Name".into(),
                direction: OrderDirection::default(),
            }],
        );

        assert_eq!(request.order_by.to_param().as_deref(), Some("name.asc"));
    }

    #[test]
    fn specs_apply_in_sequence() {
        let request = translate_order_by(
            helpers::from_table("member"),
            &[
                OrderSpec {
                    field: "Grade".into(),
                    direction: OrderDirection::Desc,
                },
                OrderSpec {
                    field: "Name".into(),
                    direction: OrderDirection::Asc,
                },
            ],
        );

        assert_eq!(
            request.order_by.to_param().as_deref(),
            Some("grade.desc,name.asc")
        );
    }
}
