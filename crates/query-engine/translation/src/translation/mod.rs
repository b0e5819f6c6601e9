//! Translate an incoming caller request into a REST request to be run against the hosted database.

pub mod error;
pub mod helpers;
pub mod models;
pub mod mutation;
pub mod query;
