//! Translate incoming writes.

pub mod insert;
pub mod update;
