//! Request execution against the hosted REST service.

pub mod backend;
pub mod error;
pub mod metrics;
pub mod query;
