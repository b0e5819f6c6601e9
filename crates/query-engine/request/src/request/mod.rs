//! The outbound request model: a REST request against one table, built
//! fluently and rendered into the service's query-string dialect.

pub mod ast;
pub mod convert;
pub mod helpers;
