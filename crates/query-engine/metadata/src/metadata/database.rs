//! The comparison vocabulary callers use in WHERE conditions.

use enum_iterator::Sequence;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The complete list of comparison operators a WHERE condition may name.
///
/// Anything else is not an operator: conditions naming one add no filter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Sequence,
    Serialize,
    Deserialize,
    JsonSchema,
)]
pub enum ComparisonOperator {
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEqualTo,
    GreaterThan,
    GreaterThanOrEqualTo,
    Like,
    In,
}

impl ComparisonOperator {
    /// The canonical symbol for the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::NotEquals => "<>",
            Self::LessThan => "<",
            Self::LessThanOrEqualTo => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqualTo => ">=",
            Self::Like => "LIKE",
            Self::In => "IN",
        }
    }

    /// Look up an operator by symbol. Matching ignores case, so `like` and
    /// `LIKE` are the same operator; `!=` is accepted as an alias of `<>`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.to_uppercase().as_str() {
            "=" => Some(Self::Equals),
            "<>" | "!=" => Some(Self::NotEquals),
            "<" => Some(Self::LessThan),
            "<=" => Some(Self::LessThanOrEqualTo),
            ">" => Some(Self::GreaterThan),
            ">=" => Some(Self::GreaterThanOrEqualTo),
            "LIKE" => Some(Self::Like),
            "IN" => Some(Self::In),
            _ => None,
        }
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_operator_parses_from_its_symbol() {
        for operator in enum_iterator::all::<ComparisonOperator>() {
            assert_eq!(
                ComparisonOperator::from_symbol(operator.symbol()),
                Some(operator)
            );
        }
    }

    #[test]
    fn symbols_are_case_insensitive() {
        assert_eq!(
            ComparisonOperator::from_symbol("like"),
            Some(ComparisonOperator::Like)
        );
        assert_eq!(
            ComparisonOperator::from_symbol("In"),
            Some(ComparisonOperator::In)
        );
    }

    #[test]
    fn bang_equals_is_not_equals() {
        assert_eq!(
            ComparisonOperator::from_symbol("!="),
            Some(ComparisonOperator::NotEquals)
        );
    }

    #[test]
    fn unknown_symbols_are_not_operators() {
        assert_eq!(ComparisonOperator::from_symbol("BOGUS"), None);
        assert_eq!(ComparisonOperator::from_symbol(" ="), None);
        assert_eq!(ComparisonOperator::from_symbol(""), None);
    }
}
