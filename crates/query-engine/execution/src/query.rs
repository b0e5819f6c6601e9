//! Execute a request against the REST service.

use tracing::{info_span, Instrument};

use query_engine_request::request::ast;

use crate::backend::Backend;
use crate::error::Error;
use crate::metrics;

/// Render a request, send it and return the response body, if any.
pub async fn execute(
    backend: &dyn Backend,
    metrics: &metrics::Metrics,
    request: &ast::Request,
) -> Result<Option<serde_json::Value>, Error> {
    let rendered = request.render();

    tracing::info!(
        method = ?rendered.method,
        table = %rendered.path,
        query = %rendered.query_string(),
    );

    metrics.record_request();

    let response = backend
        .execute(&rendered)
        .instrument(info_span!("Execute request", table = %rendered.path))
        .await?;

    response.into_result()
}
