//! Translate SQL-shaped requests into calls against a hosted PostgREST service.
//!
//! Every operation returns a [`ResultEnvelope`]; failures never escape as
//! errors or panics.

pub mod envelope;
pub mod error;
pub mod health;
pub mod mutation;
pub mod query;
pub mod state;

pub use envelope::ResultEnvelope;
pub use health::health_check;
pub use mutation::{add_data, update_data};
pub use query::get_data;
pub use state::{create_state, State};

pub use query_engine_translation::translation::models::{
    InsertRequest, OrderDirection, OrderSpec, QueryRequest, SingleOrList, UpdateRequest,
    WhereCondition,
};
