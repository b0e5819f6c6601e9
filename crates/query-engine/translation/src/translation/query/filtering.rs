//! Handle filtering/where clauses translation.

use query_engine_metadata::metadata::ComparisonOperator;
use query_engine_request::request::ast;

use super::values::translate_json_value;
use crate::translation::error::Error;
use crate::translation::helpers::normalize_identifier;
use crate::translation::models::WhereCondition;

/// The filter a comparison operator translates to.
pub fn translate_operator(operator: ComparisonOperator) -> ast::FilterOperator {
    match operator {
        ComparisonOperator::Equals => ast::FilterOperator::Equals,
        ComparisonOperator::NotEquals => ast::FilterOperator::NotEquals,
        ComparisonOperator::LessThan => ast::FilterOperator::LessThan,
        ComparisonOperator::LessThanOrEqualTo => ast::FilterOperator::LessThanOrEqualTo,
        ComparisonOperator::GreaterThan => ast::FilterOperator::GreaterThan,
        ComparisonOperator::GreaterThanOrEqualTo => ast::FilterOperator::GreaterThanOrEqualTo,
        ComparisonOperator::Like => ast::FilterOperator::CaseInsensitiveLike,
        ComparisonOperator::In => ast::FilterOperator::In,
    }
}

/// Add one filter per condition to the request. Conditions naming an unknown
/// operator, and `IN` conditions whose value is not a list, add nothing.
pub fn translate_where(
    request: ast::Request,
    conditions: &[WhereCondition],
) -> Result<ast::Request, Error> {
    conditions
        .iter()
        .try_fold(request, |request, condition| {
            let field = normalize_identifier(&condition.field);

            let Some(operator) = ComparisonOperator::from_symbol(&condition.operator) else {
                tracing::debug!(
                    field = %field,
                    operator = %condition.operator,
                    "skipping condition with unknown operator"
                );
                return Ok(request);
            };

            if operator == ComparisonOperator::In && !condition.value.is_array() {
                tracing::debug!(field = %field, "skipping IN condition without a list value");
                return Ok(request);
            }

            let value = translate_json_value(&field, &condition.value)?;
            Ok(request.filter(field, translate_operator(operator), value))
        })
}

/// Add an equality filter per condition, whatever operator it names.
pub fn translate_equality_where(
    request: ast::Request,
    conditions: &[WhereCondition],
) -> Result<ast::Request, Error> {
    conditions.iter().try_fold(request, |request, condition| {
        let field = normalize_identifier(&condition.field);
        let value = translate_json_value(&field, &condition.value)?;
        Ok(request.eq(field, value))
    })
}
