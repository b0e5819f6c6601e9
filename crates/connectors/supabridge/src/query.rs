//! The read operation.

use tracing::{info_span, Instrument};

use query_engine_execution::query as execution;
use query_engine_translation::translation::{models::QueryRequest, query as translation};

use crate::envelope::ResultEnvelope;
use crate::error::Error;
use crate::state::State;

/// Read rows. Succeeds with the rows, or `[]` when the service returns no body.
pub async fn get_data(state: &State, request: QueryRequest) -> ResultEnvelope {
    let result = async {
        let rest_request = translation::translate(&state.metadata, &request)?;
        let data =
            execution::execute(state.backend.as_ref(), &state.metrics, &rest_request).await?;
        Ok::<_, Error>(data)
    }
    .instrument(info_span!("Get data", table = %request.table))
    .await;

    match result {
        Ok(data) => ResultEnvelope::rows(match data {
            None | Some(serde_json::Value::Null) => serde_json::Value::Array(vec![]),
            Some(rows) => rows,
        }),
        Err(err) => failure(state, "Get data error", &err),
    }
}

/// Log the failure, count it and fold it into an envelope.
pub(crate) fn failure(state: &State, event_name: &'static str, err: &Error) -> ResultEnvelope {
    tracing::error!(
        meta.signal_type = "log",
        event.domain = "supabridge",
        event.name = event_name,
        name = event_name,
        body = %err,
        error = true,
    );
    if err.is_service_error() {
        state.metrics.record_service_error();
    } else {
        state.metrics.record_local_error();
    }
    ResultEnvelope::failure(err)
}
