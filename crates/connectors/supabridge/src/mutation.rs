//! The write operations.

use tracing::{info_span, Instrument};

use query_engine_execution::query as execution;
use query_engine_translation::translation::models::{InsertRequest, UpdateRequest};
use query_engine_translation::translation::mutation::{insert, update};

use crate::envelope::ResultEnvelope;
use crate::error::Error;
use crate::query::failure;
use crate::state::State;

/// Insert one row and return it with its best-effort identifier.
pub async fn add_data(state: &State, request: InsertRequest) -> ResultEnvelope {
    let table = request.table.clone();
    let result = async {
        let rest_request = insert::translate(&state.metadata, request);
        let row =
            execution::execute(state.backend.as_ref(), &state.metrics, &rest_request).await?;
        Ok::<_, Error>(row.unwrap_or(serde_json::Value::Null))
    }
    .instrument(info_span!("Add data", table = %table))
    .await;

    match result {
        Ok(row) => ResultEnvelope::inserted(insert::insert_id(&row), row),
        Err(err) => failure(state, "Add data error", &err),
    }
}

/// Update every row matching all conditions, compared for equality.
pub async fn update_data(state: &State, request: UpdateRequest) -> ResultEnvelope {
    let table = request.table.clone();
    let result = async {
        let rest_request = update::translate(&state.metadata, request)?;
        execution::execute(state.backend.as_ref(), &state.metrics, &rest_request).await?;
        Ok::<_, Error>(())
    }
    .instrument(info_span!("Update data", table = %table))
    .await;

    match result {
        Ok(()) => ResultEnvelope::updated(),
        Err(err) => failure(state, "Update data error", &err),
    }
}
