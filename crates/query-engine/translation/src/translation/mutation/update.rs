//! Translate an `UpdateRequest`.
//!
//! Unlike reads, updates only match on equality: every condition filters
//! `field = value` whatever operator it names.

use query_engine_metadata::metadata;
use query_engine_request::request::{ast, helpers};

use crate::translation::error::Error;
use crate::translation::helpers::{normalize_row, resolve_table_name};
use crate::translation::models;
use crate::translation::query::filtering;

pub fn translate(
    metadata: &metadata::Metadata,
    update_request: models::UpdateRequest,
) -> Result<ast::Request, Error> {
    let table_name = resolve_table_name(metadata, &update_request.table);

    let request = helpers::from_table(table_name).update(normalize_row(update_request.data));

    filtering::translate_equality_where(request, &update_request.where_)
}
