//! Handle field selection.

use crate::translation::helpers::normalize_identifier;
use query_engine_request::request::{ast, helpers};

/// The wildcard a caller may list to ask for every column.
const WILDCARD: &str = "*";

/// Translate the requested fields into a select list.
pub fn translate_fields(fields: Option<&[String]>) -> ast::SelectList {
    match fields {
        Some(fields) if !fields.is_empty() && !fields.iter().any(|field| field == WILDCARD) => {
            helpers::columns_select(fields.iter().map(|field| normalize_identifier(field)))
        }
        _ => helpers::star_select(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn no_fields_selects_everything() {
        assert_eq!(translate_fields(None), ast::SelectList::SelectStar);
        assert_eq!(translate_fields(Some(&[])), ast::SelectList::SelectStar);
    }

    #[test]
    fn a_wildcard_anywhere_selects_everything() {
        let requested = fields(&["Name", "*"]);
        assert_eq!(
            translate_fields(Some(&requested)),
            ast::SelectList::SelectStar
        );
    }

    #[test]
    fn named_fields_are_lowercased() {
        let requested = fields(&["Name", "MEMBER_ID"]);
        assert_eq!(
            translate_fields(Some(&requested)),
            helpers::columns_select(["name", "member_id"])
        );
    }
}
