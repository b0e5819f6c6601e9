//! Translate an incoming `QueryRequest`.

pub mod fields;
pub mod filtering;
pub mod sorting;
pub mod values;

use query_engine_metadata::metadata;
use query_engine_request::request::{ast, helpers};

use crate::translation::error::Error;
use crate::translation::helpers::resolve_table_name;
use crate::translation::models;

/// Translate the incoming QueryRequest to a read request against the physical table.
pub fn translate(
    metadata: &metadata::Metadata,
    query_request: &models::QueryRequest,
) -> Result<ast::Request, Error> {
    let table_name = resolve_table_name(metadata, &query_request.table);

    let request = helpers::from_table(table_name)
        .select(fields::translate_fields(query_request.fields.as_deref()));

    let request = match &query_request.where_ {
        Some(conditions) => filtering::translate_where(request, conditions)?,
        None => request,
    };

    let request = sorting::translate_order_by(request, &query_request.order_specs());

    let request = match query_request.limit {
        Some(limit) if limit > 0 => request.limit(limit),
        _ => request,
    };

    // log and return
    tracing::debug!("REST request: {:?}", request);
    Ok(request)
}
