//! Transient state used by the bridge.
//!
//! This is initialized on startup.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info_span, Instrument};

use query_engine_execution::backend::{Backend, PostgrestClient};
use query_engine_execution::{error as execution, metrics};
use query_engine_metadata::metadata;
use supabridge_configuration::Configuration;

/// State shared by every operation. Cheap to clone.
#[derive(Clone)]
pub struct State {
    pub metadata: Arc<metadata::Metadata>,
    pub metrics: metrics::Metrics,
    pub backend: Arc<dyn Backend>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("metadata", &self.metadata)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl State {
    /// State over any backend.
    pub fn with_backend(
        metadata: metadata::Metadata,
        metrics: metrics::Metrics,
        backend: Arc<dyn Backend>,
    ) -> Self {
        State {
            metadata: Arc::new(metadata),
            metrics,
            backend,
        }
    }
}

/// Register metrics and build the REST client.
pub async fn create_state(
    configuration: &Configuration,
    metrics_registry: &mut prometheus::Registry,
) -> Result<State, InitializationError> {
    let metrics = async {
        metrics::Metrics::initialize(metrics_registry).map_err(InitializationError::MetricsError)
    }
    .instrument(info_span!("Setup metrics"))
    .await?;

    let client = PostgrestClient::new(
        configuration.rest_url.clone(),
        configuration.api_key.clone(),
        configuration.schema.clone(),
    )
    .map_err(InitializationError::ClientError)?;

    Ok(State::with_backend(
        configuration.metadata.clone(),
        metrics,
        Arc::new(client),
    ))
}

/// State initialization error.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("error initializing metrics: {0}")]
    MetricsError(prometheus::Error),
    #[error("unable to create the REST client: {0}")]
    ClientError(execution::Error),
}
