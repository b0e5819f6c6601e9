//! Errors for translation.

use thiserror::Error;

/// A type for translation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Conditions on '{field}' containing {thing} are not supported.")]
    ValueNotSupported { field: String, thing: String },
}
