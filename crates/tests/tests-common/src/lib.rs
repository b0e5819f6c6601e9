//! Common functions used across test cases.

pub mod fake_service;
pub mod helpers;
