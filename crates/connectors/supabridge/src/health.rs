//! Health check for the bridge.

use query_engine_execution::error::Error;

use crate::state::State;

/// Check that the REST service is reachable and accepts our credentials.
pub async fn health_check(state: &State) -> Result<(), Error> {
    state.backend.health().await.map_err(|err| {
        tracing::error!(
            meta.signal_type = "log",
            event.domain = "supabridge",
            event.name = "Health check error",
            name = "Health check error",
            body = %err,
            error = true,
        );
        err
    })
}
