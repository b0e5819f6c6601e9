//! Everything that can go wrong inside an operation before it is folded into
//! an envelope.

use thiserror::Error;

use query_engine_execution::error as execution;
use query_engine_translation::translation::error as translation;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Translation(#[from] translation::Error),
    #[error("{0}")]
    Execution(#[from] execution::Error),
}

impl Error {
    /// Whether the service itself reported the failure.
    pub fn is_service_error(&self) -> bool {
        matches!(self, Error::Execution(execution::Error::Service(_)))
    }
}
